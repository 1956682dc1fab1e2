//! Route paths shared by the router and its clients.

pub const DONATIONS: &str = "/api/donations";
pub const NGO_REQUESTS: &str = "/api/ngo-requests";
pub const INVENTORY: &str = "/api/inventory";
pub const HEALTH: &str = "/health";
