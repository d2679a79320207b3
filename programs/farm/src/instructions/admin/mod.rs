// farm/instructions/admin/mod.rs

pub mod initialize;

pub use initialize::Initialize;
pub(crate) use initialize::__client_accounts_initialize;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use initialize::__cpi_client_accounts_initialize;
    }
}
