mod case;
mod lookup;
mod resolve;
mod run_info;

pub use case::run_case;
pub use lookup::run_lookup;
pub use resolve::{run_check_url, run_path, run_uri};
pub use run_info::run_run_info;
