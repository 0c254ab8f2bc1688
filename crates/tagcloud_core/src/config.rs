//! Fixed configuration shared by every run.

/// Smallest font size class emitted (`f11`).
pub const MIN_FONT_SIZE: u32 = 11;

/// Largest font size class emitted (`f48`).
pub const MAX_FONT_SIZE: u32 = 48;

/// Characters that delimit words. Everything else is word content.
pub const SEPARATORS: &str = "\t\n\r,:;.?!-\u{2014}()[]{}'\"/*&$#@^_+=<>|`~\\ ";

/// Course-hosted stylesheet linked from every page.
pub const REMOTE_STYLESHEET_URL: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Stylesheet expected next to the generated page.
pub const LOCAL_STYLESHEET: &str = "tagcloud.css";
