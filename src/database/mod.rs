//! Central hub for all database-related logic. Each submodule owns the
//! queries for one concern, e.g. `database::exp::add_total`.

pub mod economy;
pub mod entitlements;
pub mod exp;
pub mod init;
