pub mod core {
    pub mod config;
    pub mod error;
    pub mod reducer;
    pub mod state;
    pub mod tracing_init;
}

pub mod models {
    pub mod action;
    pub mod user;
}

pub mod stores {
    pub mod dataset;
    pub mod leaderboard_store;
}

pub mod handlers {
    pub mod command;
    pub mod session;
    pub mod sort_toggle;
}

pub mod render {
    pub mod table;
}

pub mod utils {
    pub mod collation;
}
