pub mod error;
pub mod privileged_profile_access;
pub mod profile_reader;
pub mod supabase;

pub use error::{Result, StoreError};
pub use privileged_profile_access::PrivilegedProfileAccess;
pub use profile_reader::ProfileReader;
pub use supabase::privileged_rpc::PrivilegedProfileRpc;
pub use supabase::profile_store::SupabaseProfileStore;
