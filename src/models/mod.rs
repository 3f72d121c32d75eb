pub mod payout;
pub mod response;
pub mod rpc;

pub use payout::*;
pub use response::*;
pub use rpc::*;
