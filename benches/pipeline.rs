use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Error};
use benchmark_rs::benchmarks::Benchmarks;
use benchmark_rs::stopwatch::StopWatch;
use data_encoding::HEXLOWER;
use rand::Rng;
use simple_logger::SimpleLogger;

use pharmacy_counting::normalize_mode::NormalizeMode;
use pharmacy_counting::report::Report;

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Clone)]
pub struct BenchmarkConfig {
    files: BTreeMap<usize, PathBuf>,
    bench_results_dir: PathBuf,
    normalize_mode: NormalizeMode,
    description: String,
}

impl BenchmarkConfig {
    pub fn new(files: BTreeMap<usize, PathBuf>, bench_results_dir: PathBuf, normalize_mode: NormalizeMode, description: &str) -> BenchmarkConfig {
        BenchmarkConfig {
            files,
            bench_results_dir,
            normalize_mode,
            description: description.to_string(),
        }
    }

    pub fn get_input_path(&self, key: usize) -> PathBuf {
        self.files.get(&key).unwrap().clone()
    }

    pub fn bench_results_dir(&self) -> &PathBuf {
        &self.bench_results_dir
    }

    pub fn normalize_mode(&self) -> NormalizeMode {
        self.normalize_mode
    }
}

impl Display for BenchmarkConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "normalize mode: {:?}, description: {}",
                 self.normalize_mode,
                 self.description,
        )
    }
}

fn temp_file_name(dir: &PathBuf) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

fn cleanup(bench_results_dir: &PathBuf) -> Result<(), anyhow::Error> {
    if bench_results_dir.exists() {
        fs::remove_dir_all(bench_results_dir.clone()).with_context(|| anyhow!("{}", bench_results_dir.to_string_lossy()))?;
    }
    Ok(())
}

fn setup(bench_input_dir: &PathBuf, bench_results_dir: &PathBuf) -> Result<(), anyhow::Error> {
    cleanup(bench_results_dir)?;

    if !bench_input_dir.exists() {
        fs::create_dir_all(bench_input_dir.clone())?;
    }

    if !bench_results_dir.exists() {
        fs::create_dir_all(bench_results_dir.clone())
            .with_context(|| anyhow!("{}", bench_results_dir.to_string_lossy()))?;
    }

    Ok(())
}

fn create_input_files(count: usize, factor: usize, drugs: usize, base_path: PathBuf) -> Result<BTreeMap<usize, PathBuf>, anyhow::Error> {
    let mut rng = rand::thread_rng();
    let mut files: BTreeMap<usize, PathBuf> = BTreeMap::new();
    for i in 1..=count {
        let number_of_lines = i * factor;
        let path = base_path.join(PathBuf::from(format!("claims-{number_of_lines}")));
        if !path.exists() {
            let mut writer = BufWriter::new(
                File::create(&path)
                    .with_context(|| anyhow!("path: {}", path.to_string_lossy()))?);
            writeln!(writer, "id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost")?;
            for j in 0..number_of_lines {
                let drug = rng.gen_range(0..drugs);
                let name = if drug % 7 == 0 {
                    format!("\"DRUG, {drug}\"")
                } else {
                    format!("DRUG-{drug}")
                };
                writeln!(
                    writer,
                    "{},Last{},First{},{},{}.{:02}",
                    j,
                    rng.gen_range(0..1000),
                    rng.gen_range(0..100),
                    name,
                    rng.gen_range(0..10_000),
                    rng.gen_range(0..100),
                )?;
            }
            writer.flush()?;
        }
        files.insert(number_of_lines, path);
    }
    Ok(files)
}

fn report(stop_watch: &mut StopWatch, config: BenchmarkConfig, work: usize) -> Result<(), anyhow::Error> {
    stop_watch.pause();
    let input_path = config.get_input_path(work);
    let output_path = temp_file_name(config.bench_results_dir());
    log::info!("Start report {}", input_path.to_string_lossy());
    stop_watch.resume();
    let mut report = Report::new(input_path.clone(), output_path.clone());
    report.with_normalize_mode(config.normalize_mode());
    report.run()?;
    stop_watch.pause();
    log::info!("Finish report {}", input_path.to_string_lossy());
    fs::remove_file(output_path.clone())
        .with_context(|| anyhow!("{}", output_path.to_string_lossy()))?;
    Ok(())
}

#[test]
fn pharmacy_counting_bench() -> Result<(), Error> {
    SimpleLogger::new().init().unwrap();
    log::info!("Started pharmacy_counting_bench.");

    let bench_input_dir = PathBuf::from("./target/benchmarks/input");
    let bench_results_dir = PathBuf::from("./target/benchmarks/results");
    setup(&bench_input_dir, &bench_results_dir)?;

    let few_drugs = create_input_files(10, 10_000, 100, bench_input_dir.clone())?;

    let mut benchmarks = Benchmarks::new("pharmacy-counting");

    benchmarks.add(
        "few-drugs-full",
        report,
        BenchmarkConfig::new(
            few_drugs.clone(),
            bench_results_dir.clone(),
            NormalizeMode::Full,
            "100 drugs, full names",
        ),
        few_drugs.keys().cloned().collect(),
        3,
        0,
    )?;

    benchmarks.add(
        "few-drugs-alpha",
        report,
        BenchmarkConfig::new(
            few_drugs.clone(),
            bench_results_dir.clone(),
            NormalizeMode::AlphanumericOnly,
            "100 drugs, alphanumeric names",
        ),
        few_drugs.keys().cloned().collect(),
        3,
        0,
    )?;

    benchmarks.run()?;
    benchmarks.save_to_csv(PathBuf::from("./target/benchmarks/"), true, true)?;
    benchmarks.save_to_json(PathBuf::from("./target/benchmarks/"))?;

    log::info!("Finished pharmacy_counting_bench.");
    Ok(())
}
