// farm/instructions/open/mod.rs

pub mod claim_and_close;
pub mod claim_for;
pub mod close_farm;
pub mod open_farm;
pub mod open_farm_with_permit;

pub use claim_and_close::ClaimAndClose;
pub(crate) use claim_and_close::__client_accounts_claim_and_close;
pub use claim_for::ClaimFor;
pub(crate) use claim_for::__client_accounts_claim_for;
pub use close_farm::CloseFarm;
pub(crate) use close_farm::__client_accounts_close_farm;
pub use open_farm::OpenFarm;
pub(crate) use open_farm::__client_accounts_open_farm;
pub use open_farm_with_permit::OpenFarmWithPermit;
pub(crate) use open_farm_with_permit::__client_accounts_open_farm_with_permit;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use claim_and_close::__cpi_client_accounts_claim_and_close;
        pub(crate) use claim_for::__cpi_client_accounts_claim_for;
        pub(crate) use close_farm::__cpi_client_accounts_close_farm;
        pub(crate) use open_farm::__cpi_client_accounts_open_farm;
        pub(crate) use open_farm_with_permit::__cpi_client_accounts_open_farm_with_permit;
    }
}
