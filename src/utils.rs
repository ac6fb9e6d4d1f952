use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use ureq::{Agent, AgentBuilder};

// Nominatim's usage policy wants bulk users to be reachable.
pub const USER_AGENT: &str = "cidades (script para geocoding; contato@exemplo.com.br)";

pub fn agent() -> Agent {
    AgentBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
}

pub fn progress_bar(len: u64) -> ProgressBar {
    ProgressBar::new(len).with_style(
        ProgressStyle::with_template("[{elapsed_precise}] {pos}/{len} ({per_sec})")
            .expect("hardcoded"),
    )
}
