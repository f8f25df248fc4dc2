//! Online/offline banner state

pub const OFFLINE_BANNER: &str = "You are offline";

#[derive(Debug, Clone)]
pub struct OnlineStatus {
    online: bool,
}

impl OnlineStatus {
    pub fn new() -> Self {
        Self { online: true }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Record a connectivity change; returns true if the status flipped
    pub fn set_online(&mut self, online: bool) -> bool {
        let changed = self.online != online;
        self.online = online;
        changed
    }

    /// Banner text while offline
    pub fn banner(&self) -> Option<&'static str> {
        (!self.online).then_some(OFFLINE_BANNER)
    }
}

impl Default for OnlineStatus {
    fn default() -> Self {
        Self::new()
    }
}
