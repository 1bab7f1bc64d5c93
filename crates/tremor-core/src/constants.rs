//! Simulation constants and tuning parameters.

/// Default host frame rate (Hz) for the playback loop.
pub const FRAME_RATE: u32 = 60;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// --- Building risk ---

/// Risk assumed for buildings that have never been scored.
pub const DEFAULT_UNSCORED_RISK: f64 = 50.0;

/// Maximum points contributed by neighborhood liquefaction.
pub const LIQUEFACTION_MAX_POINTS: f64 = 20.0;

/// Points removed for a seismic retrofit.
pub const RETROFIT_BONUS: i32 = -15;

/// Points added for a soft-story structure.
pub const SOFT_STORY_PENALTY: i32 = 15;

// --- Neighbor contagion ---

/// Radius within which another building counts as a neighbor (meters).
pub const NEIGHBOR_RADIUS_M: f64 = 150.0;

/// Neighbor risk at or above which a neighbor is "high risk".
pub const NEIGHBOR_HIGH_RISK: f64 = 70.0;

/// Maximum contagion boost.
pub const NEIGHBOR_BOOST_CAP: u8 = 20;

/// Number of neighbor ids reported alongside a boost.
pub const NEIGHBOR_SAMPLE_SIZE: usize = 5;

// --- Seismic damage ---

/// Time for a shock front to reach its full radius (seconds).
pub const SHOCKWAVE_DURATION_SECS: f64 = 60.0;

/// Full shock front radius per unit of magnitude (meters).
pub const SHOCKWAVE_RADIUS_PER_MAGNITUDE: f64 = 15_000.0;

/// Time over which damage ramps in after the front passes (seconds).
pub const DAMAGE_RAMP_SECS: f64 = 5.0;

/// Scale applied to magnitude × distance effect.
pub const BASE_DAMAGE_SCALE: f64 = 30.0;

/// Softening constant in the distance attenuation (km).
pub const ATTENUATION_SOFTENING_KM: f64 = 10.0;

/// The district sits on fill; every tracked building is in a liquefaction zone.
pub const LIQUEFACTION_ZONE_MULTIPLIER: f64 = 1.3;

/// Upper bound on aggregate building damage.
pub const MAX_DAMAGE: f64 = 100.0;

/// How long an epicenter marker stays visible (seconds).
pub const EPICENTER_VISIBLE_SECS: f64 = 300.0;

/// Shockwave ring opacity at the moment of rupture.
pub const SHOCKWAVE_START_OPACITY: f64 = 0.8;

/// Minimum shockwave ring opacity.
pub const SHOCKWAVE_MIN_OPACITY: f64 = 0.1;

/// Ring color for a main shock.
pub const EARTHQUAKE_COLOR: &str = "#ef4444";

/// Ring color for an aftershock.
pub const AFTERSHOCK_COLOR: &str = "#f97316";

// --- Tsunami ---

/// Latitude where the wave starts in the bay.
pub const TSUNAMI_OCEAN_START: f64 = 37.820;

/// Northern edge of the district.
pub const TSUNAMI_COASTLINE: f64 = 37.810;

/// Southernmost latitude the water reaches.
pub const TSUNAMI_MAX_INLAND: f64 = 37.798;

/// Western longitude bound of the flood zone.
pub const TSUNAMI_WEST_EDGE: f64 = -122.452;

/// Eastern longitude bound of the flood zone.
pub const TSUNAMI_EAST_EDGE: f64 = -122.418;

/// Fallback approach time when a scenario gives no arrival (seconds).
pub const TSUNAMI_APPROACH_SECS: f64 = 810.0;

/// Time for the flood to spread inland (seconds).
pub const TSUNAMI_ADVANCE_SECS: f64 = 300.0;

/// Time at maximum inundation (seconds).
pub const TSUNAMI_PEAK_SECS: f64 = 60.0;

/// Time for the water to recede (seconds).
pub const TSUNAMI_RECEDE_SECS: f64 = 180.0;

/// Offset of the flood polygon's seaward edge past the coastline (degrees).
pub const FLOOD_POLYGON_COAST_OFFSET: f64 = 0.002;

/// Flood damage before depth shaping.
pub const FLOOD_BASE_DAMAGE: f64 = 40.0;

/// Additional flood damage scaled by (1 - normalized depth).
pub const FLOOD_DEPTH_DAMAGE: f64 = 45.0;

/// Half-width of the flood damage jitter.
pub const FLOOD_JITTER: f64 = 7.5;

/// Floor applied to any recorded flood damage.
pub const FLOOD_MIN_DAMAGE: f64 = 30.0;

// --- Run lifecycle ---

/// Settle time after the water clears before a tsunami run ends (seconds).
pub const RUN_SETTLE_SECS: f64 = 30.0;

/// Fraction of the scenario duration that ends a run without a tsunami.
pub const RUN_END_FRACTION: f64 = 0.9;

// --- Shelters ---

/// Fraction of shelter capacity reached at the end of a scenario.
pub const SHELTER_PEAK_FILL: f64 = 0.85;

/// Fill percent at which a shelter turns from open to filling.
pub const SHELTER_FILLING_PERCENT: f64 = 50.0;

/// Fill percent at which a shelter is critical.
pub const SHELTER_CRITICAL_PERCENT: f64 = 75.0;

// --- Building synthesis ---

/// Story height used to derive floor counts from footprint heights (meters).
pub const STORY_HEIGHT_M: f64 = 3.5;

/// Height assumed when a footprint carries none (meters).
pub const DEFAULT_FOOTPRINT_HEIGHT_M: f64 = 3.0;

/// Tallest building the synthesizer produces (floors).
pub const MAX_SYNTH_FLOORS: u32 = 6;

/// Buildings north of this latitude are near the coast.
pub const NEAR_COAST_LAT: f64 = 37.805;

/// Minimum address query length for building search.
pub const SEARCH_MIN_QUERY_LEN: usize = 3;

/// Maximum number of building search results.
pub const SEARCH_MAX_RESULTS: usize = 5;
