use anyhow::{Context, Result};

/// Where the portfolio app looks for its dataset.
const OUTPUT_PATH: &str = "Electric_Vehicle_Population_Data 2.csv";
const ROWS: usize = 2_000;

const HEADER: [&str; 10] = [
    "VIN (1-10)",
    "County",
    "City",
    "State",
    "Postal Code",
    "Model Year",
    "Make",
    "Model",
    "Electric Vehicle Type",
    "Electric Range",
];

/// (make, model, type, range in miles, relative popularity)
const MODELS: [(&str, &str, &str, u32, u32); 14] = [
    ("TESLA", "MODEL Y", "Battery Electric Vehicle (BEV)", 291, 30),
    ("TESLA", "MODEL 3", "Battery Electric Vehicle (BEV)", 272, 25),
    ("NISSAN", "LEAF", "Battery Electric Vehicle (BEV)", 149, 9),
    ("CHEVROLET", "BOLT EV", "Battery Electric Vehicle (BEV)", 259, 7),
    ("CHEVROLET", "VOLT", "Plug-in Hybrid Electric Vehicle (PHEV)", 53, 4),
    ("FORD", "MUSTANG MACH-E", "Battery Electric Vehicle (BEV)", 250, 5),
    ("FORD", "FUSION", "Plug-in Hybrid Electric Vehicle (PHEV)", 19, 2),
    ("KIA", "NIRO", "Plug-in Hybrid Electric Vehicle (PHEV)", 26, 4),
    ("BMW", "X5", "Plug-in Hybrid Electric Vehicle (PHEV)", 30, 3),
    ("TOYOTA", "RAV4 PRIME", "Plug-in Hybrid Electric Vehicle (PHEV)", 42, 4),
    ("VOLKSWAGEN", "ID.4", "Battery Electric Vehicle (BEV)", 260, 3),
    ("JEEP", "WRANGLER", "Plug-in Hybrid Electric Vehicle (PHEV)", 21, 2),
    ("RIVIAN", "R1S", "Battery Electric Vehicle (BEV)", 316, 1),
    ("HYUNDAI", "IONIQ 5", "Battery Electric Vehicle (BEV)", 220, 1),
];

/// (county, city, state, postal code, relative weight)
const PLACES: [(&str, &str, &str, &str, u32); 8] = [
    ("King", "Seattle", "WA", "98101", 40),
    ("Snohomish", "Everett", "WA", "98201", 12),
    ("Pierce", "Tacoma", "WA", "98402", 10),
    ("Clark", "Vancouver", "WA", "98660", 6),
    ("Los Angeles", "Los Angeles", "CA", "90001", 3),
    ("Travis", "Austin", "TX", "73301", 2),
    ("Multnomah", "Portland", "OR", "97201", 2),
    ("Kings", "Brooklyn", "NY", "11201", 1),
];

/// Seeded splitmix64 stream; the same seed always writes the same file.
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Index drawn proportionally to `weights`.
    fn weighted(&mut self, weights: impl Iterator<Item = u32> + Clone) -> usize {
        let total: u64 = weights.clone().map(u64::from).sum();
        let mut pick = self.below(total);
        for (i, w) in weights.enumerate() {
            let w = u64::from(w);
            if pick < w {
                return i;
            }
            pick -= w;
        }
        0
    }

    fn vin_prefix(&mut self) -> String {
        const ALPHABET: &[u8] = b"0123456789ABCDEFGHJKLMNPRSTUVWXYZ";
        (0..10)
            .map(|_| ALPHABET[self.below(ALPHABET.len() as u64) as usize] as char)
            .collect()
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writer.write_record(HEADER).context("writing header")?;

    for _ in 0..ROWS {
        let (make, model, kind, range, _) =
            MODELS[rng.weighted(MODELS.iter().map(|m| m.4))];
        let (county, city, state, postal, _) =
            PLACES[rng.weighted(PLACES.iter().map(|p| p.4))];
        // Newer model years are more common.
        let year = (2011 + rng.weighted((0..14u32).map(|i| (i + 1) * (i + 1)))).to_string();
        let range = range.to_string();
        let vin = rng.vin_prefix();

        writer
            .write_record([
                vin.as_str(),
                county,
                city,
                state,
                postal,
                year.as_str(),
                make,
                model,
                kind,
                range.as_str(),
            ])
            .context("writing record")?;
    }

    writer.flush().context("flushing CSV")?;

    println!("Wrote {ROWS} vehicles to {OUTPUT_PATH}");
    Ok(())
}
