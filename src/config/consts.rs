// src/config/consts.rs

// Chart table markup (RTINGS frequency-response table)
pub const START_ANCHOR: &str =
    "</th></tr></thead><tbody><tr><td>0</td><td></td><td></td></tr><tr><td>";
pub const END_ANCHOR: &str = "</td></tr></tbody></table></div></div></div>";

// Middle column is always the 80 dB target reference
pub const CELL_MARKER: &str = "</td><td>80</td><td>";
pub const ROW_MARKER: &str = "</td></tr><tr><td>";
pub const CELL_SEP: &str = "\t";
pub const ROW_SEP: &str = "\n";

// URL normalization
pub const DISABLED_PARAM: &str = "disabled";
pub const DISABLED_FRAGMENT: &str = "disabled=tests:0:,0:1:";

// Browser
pub const SETTLE_MS: u64 = 1_500;
pub const POLL_MS: u64 = 250;
pub const MAX_SETTLE_MS: u64 = 30_000;
pub const TEMP_PREFIX: &str = "rtings_";
pub const TEMP_SUFFIX: &str = ".html";

// Export
pub const DEFAULT_OUT_FILE: &str = "output.txt";

// Logging
pub const LOG_FILE: &str = ".rtings/debug.log";

// GUI
pub const APP_TITLE: &str = "RTings Data Extractor";
pub const WINDOW_W: f32 = 640.0;
pub const WINDOW_H: f32 = 480.0;

pub const INSTRUCTIONS: &str = "\
Instructions:

Download the rtings page with these parameters:

Average response ON
Tests OFF
Target OFF

Make sure to select the \"Webpage, Complete\" option when saving.
This ensures the script that fetches the data is run and the data is inserted locally into your html file.
Once you have your output data you may delete the original files you downloaded.

Alternatively paste the review URL and the page is rendered for you \
(Chromium must be installed).";
