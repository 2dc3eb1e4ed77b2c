use std::fs::File;
use std::io::BufWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let num_clusters: usize = 5;
    let points_per_cluster: usize = 1000;

    // Cluster centers are drawn in the unit square; each cluster gets its
    // own radius and its points are scattered inside that circle.
    let output_path = "sample_points.csv";
    let file = File::create(output_path).expect("Failed to create output file");
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    for cluster in 0..num_clusters {
        let center_x1 = rng.next_f64();
        let center_x2 = rng.next_f64();
        let radius = 0.1 + rng.next_f64() * 0.2;

        for _ in 0..points_per_cluster {
            let angle = rng.next_f64() * std::f64::consts::TAU;
            let dist = radius * rng.next_f64();

            let x1 = center_x1 + dist * angle.cos();
            let x2 = center_x2 + dist * angle.sin();

            writer
                .write_record([
                    x1.to_string(),
                    x2.to_string(),
                    (cluster as f64).to_string(),
                ])
                .expect("Failed to write record");
        }
    }

    writer.flush().expect("Failed to flush writer");

    println!(
        "Wrote {} points in {num_clusters} clusters to {output_path}",
        num_clusters * points_per_cluster
    );
}
