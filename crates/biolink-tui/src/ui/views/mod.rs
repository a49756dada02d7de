pub mod entry;
pub mod presence;
pub mod profile;
pub mod repositories;

pub use entry::render_entry;
pub use presence::presence_lines;
pub use profile::render_profile;
pub use repositories::repository_lines;
