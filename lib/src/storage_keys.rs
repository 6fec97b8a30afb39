// Instance-storage symbols shared by every contract in the workspace.
pub const OWNER_KEY: &str = "owner";
pub const PENDING_OWNER_KEY: &str = "pending_owner";
