mod writer;

pub use writer::{
    ALL_SCORES_FILE, PUBLIC_SCORES_FILE, ReportPaths, ReportWriter, render_all, render_public,
    render_section,
};
