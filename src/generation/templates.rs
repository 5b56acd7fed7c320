//! The fixed set of files written into the target project.
//!
//! Sources live under `templates/mirage/` in the crate and are embedded at
//! compile time, so the binary works from any directory.

use crate::generation::TemplateFile;

/// Every file written on a run, in write order
pub const MIRAGE_TEMPLATES: [TemplateFile; 4] = [
    TemplateFile {
        destination: "mirage/config.ts",
        source: include_str!("../../templates/mirage/config.ts.tera"),
    },
    TemplateFile {
        destination: "app/app.ts",
        source: include_str!("../../templates/mirage/app/app.ts.tera"),
    },
    TemplateFile {
        destination: "config/environment.js",
        source: include_str!("../../templates/mirage/config/environment.js.tera"),
    },
    TemplateFile {
        destination: "tsconfig.json",
        source: include_str!("../../templates/mirage/tsconfig.json.tera"),
    },
];
