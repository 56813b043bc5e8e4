//! Output generation: HTML pages, the embedded stylesheet, JSON exports and
//! the site build that ties them together.
//!
//! # Submodules
//!
//! - [`html`]: Renders one `Report` plus the shared listings to a full page
//! - [`style`]: The stylesheet and font link embedded in every page
//! - [`json`]: Writes a parsed `Report` to `<date>.json`
//! - [`site`]: Scans the input directory and writes the dist directory
//!
//! # Output Structure
//!
//! ```text
//! dist_dir/
//! ├── 2024-01-01.html
//! ├── 2024-01-02.html
//! └── index.html           # copy of the newest page
//!
//! json_output_dir/         # only with --json-output-dir
//! ├── 2024-01-01.json
//! └── 2024-01-02.json
//! ```

pub mod html;
pub mod json;
pub mod site;
pub mod style;
