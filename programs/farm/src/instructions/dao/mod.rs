// farm/instructions/dao/mod.rs

pub mod receive_incentive;

pub use receive_incentive::ReceiveIncentive;
pub(crate) use receive_incentive::__client_accounts_receive_incentive;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use receive_incentive::__cpi_client_accounts_receive_incentive;
    }
}
