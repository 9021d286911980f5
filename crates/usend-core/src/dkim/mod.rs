/// DKIM record parsing and key pair validation
pub mod keypair;
pub mod record;

pub use keypair::validate_key_pair;
pub use record::DkimRecord;
