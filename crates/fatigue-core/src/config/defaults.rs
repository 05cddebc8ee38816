// Single source of truth for all default values.

// --- Dataset ---
pub const DEFAULT_MIN_SAMPLE_ROWS: usize = 50;
pub const DEFAULT_SPIKE_THRESHOLD_PCT: f64 = 20.0;
pub const DEFAULT_WEEK_TOLERANCE: f64 = 0.10;

// --- Analysis ---
pub const DEFAULT_QUANTILE_BANDS: usize = 4;
pub const DEFAULT_MIN_BAND_SAMPLES: usize = 30;
pub const DEFAULT_INSIGHT_MIN_DIFFERENCE: f64 = 0.10;
pub const DEFAULT_MIN_CORRELATION_PAIRS: usize = 10;

// --- Scoring (shared by both predictors) ---
pub const DEFAULT_SCORE_OFFSET: f64 = 0.5;
pub const DEFAULT_SCORE_SCALE: f64 = 1.0;
pub const DEFAULT_TIER_CUTOFFS: [f64; 3] = [0.7, 0.5, 0.3];
pub const DEFAULT_MIN_WEEKS: u32 = 4;
pub const DEFAULT_CONFIDENCE_WEEKS: u32 = 8;

// --- Burnout ---
pub const DEFAULT_BURNOUT_FORECAST_1W: f64 = 30.0;
pub const DEFAULT_BURNOUT_FORECAST_2W: f64 = 50.0;

// --- Recovery ---
pub const DEFAULT_RECOVERY_FORECAST_1W: f64 = 15.0;
pub const DEFAULT_RECOVERY_FORECAST_2W: f64 = 25.0;
pub const DEFAULT_RANK_SCORE_DIVISOR: f64 = 2.0;

// --- Fatigue alerts ---
pub const DEFAULT_FATIGUE_FREQUENCY_THRESHOLD: f64 = 3.0;
pub const DEFAULT_FATIGUE_CTR_DECLINE_PCT: f64 = -20.0;
pub const DEFAULT_FATIGUE_URGENT_MULTIPLIER: f64 = 1.5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
