pub const TARGET_WIDTH: u32 = 500;
pub const RESIZED_FILE_SUFFIX: &str = "-resized";
/// Upper bound on the pixels of a resized image, i.e. a height of at most 50 000 rows.
pub const MAX_OUTPUT_PIXELS: u64 = TARGET_WIDTH as u64 * 50_000;
