// src/config/consts.rs
use std::ops::Range;

// Net config
pub const URL: &str = "https://www.worldometers.info/coronavirus/";
pub const USER_AGENT: &str = concat!("covid_charts/", env!("CARGO_PKG_VERSION"));

// Source table
pub const TABLE_ID: &str = "main_table_countries_today";
pub const LABEL_COLUMN: &str = "Country,Other";
pub const TOTAL_CASES: &str = "TotalCases";
pub const ACTIVE_CASES: &str = "ActiveCases";
pub const NUMERIC_COLUMNS: [&str; 2] = [TOTAL_CASES, ACTIVE_CASES];
pub const CASES_SCALE: f64 = 1_000_000.0;

// Row windows over the table body (zero-based, every row counted).
// The first eight body rows of the live page are aggregates (continents, World, ...).
pub const CONTINENT_ROWS: Range<usize> = 0..6;
pub const COUNTRY_ROWS: Range<usize> = 8..18;

// Export
pub const OUT_FILE: &str = "final_project.csv";
pub const OUT_SEP: char = ',';

// Window
pub const WINDOW_TITLE: &str = "Corona Statistics";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 600.0];

// Bars: blue, orange, green, red, purple, brown, pink, gray, olive, cyan
pub const BAR_PALETTE: [[u8; 3]; 10] = [
    [0x00, 0x00, 0xFF],
    [0xFF, 0xA5, 0x00],
    [0x00, 0x80, 0x00],
    [0xFF, 0x00, 0x00],
    [0x80, 0x00, 0x80],
    [0xA5, 0x2A, 0x2A],
    [0xFF, 0xC0, 0xCB],
    [0x80, 0x80, 0x80],
    [0x80, 0x80, 0x00],
    [0x00, 0xFF, 0xFF],
];

// Pie slices: tab10
pub const PIE_PALETTE: [[u8; 3]; 10] = [
    [0x1F, 0x77, 0xB4],
    [0xFF, 0x7F, 0x0E],
    [0x2C, 0xA0, 0x2C],
    [0xD6, 0x27, 0x28],
    [0x94, 0x67, 0xBD],
    [0x8C, 0x56, 0x4B],
    [0xE3, 0x77, 0xC2],
    [0x7F, 0x7F, 0x7F],
    [0xBC, 0xBD, 0x22],
    [0x17, 0xBE, 0xCF],
];
