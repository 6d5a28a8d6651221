use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use edutrack::models::LinearRegressor;

const SUBJECTS: [&str; 5] = ["Mathematics", "English", "Science", "History", "Art"];

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

#[derive(Serialize)]
struct StudentRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "GPA")]
    gpa: f64,
    #[serde(rename = "Attendance")]
    attendance: u32,
    #[serde(rename = "Rank")]
    rank: u32,
    #[serde(rename = "Mathematics")]
    mathematics: u32,
    #[serde(rename = "English")]
    english: u32,
    #[serde(rename = "Science")]
    science: u32,
    #[serde(rename = "History")]
    history: u32,
    #[serde(rename = "Art")]
    art: u32,
}

#[derive(Serialize)]
struct AssignmentRecord {
    #[serde(rename = "Assignment")]
    assignment: &'static str,
    #[serde(rename = "Subject")]
    subject: &'static str,
    #[serde(rename = "Due Date")]
    due_date: &'static str,
    #[serde(rename = "Score")]
    score: &'static str,
    #[serde(rename = "Status")]
    status: &'static str,
}

fn score(rng: &mut SimpleRng, ability: f64) -> u32 {
    rng.gauss(ability, 6.0).clamp(0.0, 100.0).round() as u32
}

fn students(rng: &mut SimpleRng, n: usize) -> Vec<StudentRecord> {
    let mut records: Vec<StudentRecord> = (0..n)
        .map(|i| {
            let ability = rng.gauss(80.0, 8.0);
            let scores: Vec<u32> = SUBJECTS.iter().map(|_| score(rng, ability)).collect();
            let avg = scores.iter().sum::<u32>() as f64 / scores.len() as f64;
            StudentRecord {
                name: format!("Student {:02}", i + 1),
                gpa: ((avg / 25.0).clamp(0.0, 4.0) * 100.0).round() / 100.0,
                attendance: rng.gauss(94.0, 4.0).clamp(60.0, 100.0).round() as u32,
                rank: 0,
                mathematics: scores[0],
                english: scores[1],
                science: scores[2],
                history: scores[3],
                art: scores[4],
            }
        })
        .collect();

    // Rank by GPA, best first.
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| records[b].gpa.total_cmp(&records[a].gpa));
    for (rank, idx) in order.into_iter().enumerate() {
        records[idx].rank = rank as u32 + 1;
    }
    records
}

fn assignments() -> Vec<AssignmentRecord> {
    vec![
        AssignmentRecord {
            assignment: "Algebra II: Chapter 5 Test",
            subject: "Mathematics",
            due_date: "May 20, 2024",
            score: "95/100",
            status: "Graded",
        },
        AssignmentRecord {
            assignment: "The Great Gatsby Essay",
            subject: "English",
            due_date: "May 18, 2024",
            score: "88/100",
            status: "Graded",
        },
        AssignmentRecord {
            assignment: "Photosynthesis Lab Report",
            subject: "Science",
            due_date: "May 15, 2024",
            score: "72/100",
            status: "Graded",
        },
        AssignmentRecord {
            assignment: "World War II Presentation",
            subject: "History",
            due_date: "May 25, 2024",
            score: "--/--",
            status: "Submitted",
        },
        AssignmentRecord {
            assignment: "Impressionism Study Sketch",
            subject: "Art",
            due_date: "May 28, 2024",
            score: "--/--",
            status: "Upcoming",
        },
    ]
}

fn write_csv<T: Serialize>(path: &str, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Two linear GPA models over the sample's numeric columns:
/// GPA, Attendance, Rank, then the five subjects.
fn sample_models() -> [LinearRegressor; 2] {
    let features: Vec<String> = ["GPA", "Attendance", "Rank"]
        .into_iter()
        .chain(SUBJECTS)
        .map(String::from)
        .collect();

    let mut a = LinearRegressor::new(
        "model_a",
        vec![0.55, 0.004, -0.002, 0.006, 0.004, 0.005, 0.003, 0.002],
        -0.1,
    );
    a.feature_names = features.clone();

    let mut b = LinearRegressor::new(
        "model_b",
        vec![0.6, 0.002, -0.004, 0.005, 0.005, 0.004, 0.004, 0.003],
        0.0,
    );
    b.feature_names = features;
    [a, b]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let records = students(&mut rng, 24);
    write_csv("sample_data.csv", &records)?;
    write_csv("sample_assignments.csv", &assignments())?;

    fs::create_dir_all("models").context("creating models directory")?;
    for model in sample_models() {
        let path = Path::new("models").join(format!("{}.json", model.name));
        fs::write(&path, serde_json::to_string_pretty(&model)?)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    println!(
        "Wrote {} student records to sample_data.csv, assignments to sample_assignments.csv \
         and two models to models/",
        records.len()
    );
    Ok(())
}
