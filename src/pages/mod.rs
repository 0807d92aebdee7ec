//! Page components for Folio.

mod certifications;
mod home;
mod projects;
mod sampler;
mod skills;
mod stories;

pub use certifications::Certifications;
pub use home::Home;
pub use projects::Projects;
pub use sampler::Sampler;
pub use skills::Skills;
pub use stories::Stories;
