use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    rc::Rc,
    sync::{Mutex, OnceLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

pub const TEST_SEED_ENV: &str = "STOCK_TEST_SEED";

static SEEDS: OnceLock<Mutex<HashMap<&'static str, u64>>> = OnceLock::new();

fn resolve_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = SEEDS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .map_err(|e| e.to_string())?;
    let seed = *seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {key}");
        seed
    });
    Ok(seed)
}

/// Rng seeded from `STOCK_TEST_SEED`, or from a random seed printed once so a
/// failing run can be replayed.
pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(resolve_seed(key)?))
}

/// In-memory output shared between observers writing to it and the test
/// reading it back.
pub type SharedBuffer = Rc<RefCell<Vec<u8>>>;

pub fn shared_buffer() -> SharedBuffer {
    Rc::new(RefCell::new(vec![]))
}

pub fn written_lines(buffer: &SharedBuffer) -> Vec<String> {
    String::from_utf8_lossy(&buffer.borrow())
        .lines()
        .map(str::to_owned)
        .collect()
}
