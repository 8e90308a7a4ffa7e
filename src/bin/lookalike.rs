// Lookalike CLI
// Filters a word list down to Cyrillic words that can be spelled with Latin look-alikes

#[cfg(feature = "cli")]
use std::fs::File;
#[cfg(feature = "cli")]
use std::io::BufReader;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use lookalike_core::{
    default_settings_content, process_reader, transform::CALIFORNIA_MAX_LENGTH, AnomalyPolicy,
    OutputFile, Settings, Transliterator,
};

/// Find Cyrillic words that read as Latin license plates
#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "lookalike")]
#[command(version)]
#[command(about = "Convert Cyrillic words into Latin/digit look-alikes", long_about = None)]
struct Args {
    /// Input word list, one word per line
    #[arg(
        short = 'f',
        long = "file",
        value_name = "INPUT",
        required_unless_present = "print_default_config"
    )]
    input: Option<PathBuf>,

    /// Output file [default: output.txt]
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Also use loose mappings, e.g. ч as 4
    #[arg(long = "includeWeird", alias = "include-weird")]
    include_weird: bool,

    /// Use maxLength=7, otherwise the maxLength is 8
    #[arg(long)]
    california: bool,

    /// Minimum word length in letters
    #[arg(long, value_name = "N")]
    min_length: Option<usize>,

    /// Maximum word length in letters
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,

    /// How to handle words with non-Cyrillic characters (warn, ignore, fail)
    #[arg(long, value_name = "POLICY")]
    anomalies: Option<AnomalyPolicy>,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Do not echo converted words to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a settings file template and exit
    #[arg(long)]
    print_default_config: bool,
}

/// Main application state
#[cfg(feature = "cli")]
struct Application {
    settings: Settings,
    args: Args,
}

#[cfg(feature = "cli")]
impl Application {
    /// Create a new application from CLI arguments
    fn new(args: Args) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = match args.config {
            Some(ref path) => Settings::from_file(path)
                .map_err(|e| format!("Could not load settings from {}: {}", path.display(), e))?,
            None => Settings::load_default()?,
        };

        if let Some(path) = settings.source_path() {
            log::debug!("Loaded settings from {}", path.display());
        }

        apply_overrides(&mut settings, &args);

        Ok(Self { settings, args })
    }

    /// Read, convert, sort and write
    fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let input_path = self
            .args
            .input
            .as_ref()
            .ok_or_else(|| Box::<dyn std::error::Error>::from("-f <INPUT> is required"))?;

        let transliterator = Transliterator::new(self.settings.to_filter_config())?;

        // A missing input leaves an existing output file untouched; an
        // unwritable output is still reported before any line is read.
        let input = File::open(input_path)
            .map_err(|e| format!("Could not open input file {}: {}", input_path.display(), e))?;
        let output = OutputFile::create(self.settings.output_path())?;

        let outcome = process_reader(&transliterator, BufReader::new(input))?;

        if !self.args.quiet {
            for record in &outcome.records {
                println!("{}", record);
            }
        }

        let written = output.write_records(&outcome.records)?;

        let stats = &outcome.stats;
        log::info!(
            "Wrote {} of {} words to {} ({} anomalies)",
            written,
            stats.lines,
            self.settings.output_path().display(),
            stats.anomalies
        );

        Ok(())
    }
}

/// Command line flags take precedence over the settings file
#[cfg(feature = "cli")]
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if args.include_weird {
        settings.set_include_weird(true);
    }
    if args.california {
        settings.set_california(true);
        // Replaces a max_length from the settings file; --max-length still wins
        settings.set_max_length(CALIFORNIA_MAX_LENGTH);
    }
    if let Some(min_length) = args.min_length {
        settings.set_min_length(min_length);
    }
    if let Some(max_length) = args.max_length {
        settings.set_max_length(max_length);
    }
    if let Some(policy) = args.anomalies {
        settings.set_anomaly_policy(policy);
    }
    if let Some(ref output) = args.output {
        settings.set_output_path(output);
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[cfg(feature = "cli")]
fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.print_default_config {
        print!("{}", default_settings_content());
        return;
    }

    let result = Application::new(args).and_then(|app| app.run());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// Stub for when cli feature is not enabled
#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("Error: lookalike binary requires the 'cli' feature to be enabled.");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "cli")]
    fn test_args_parsing() {
        let args = Args::parse_from(["lookalike", "-f", "/tmp/words.txt"]);

        assert_eq!(args.input, Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(args.output, None);
        assert!(!args.include_weird);
        assert!(!args.california);
        assert!(!args.quiet);
        assert!(!args.verbose);
        assert!(args.anomalies.is_none());
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_args_with_options() {
        let args = Args::parse_from([
            "lookalike",
            "--includeWeird",
            "--california",
            "-f",
            "words.txt",
            "-o",
            "plates.txt",
            "--anomalies",
            "fail",
            "--min-length",
            "4",
        ]);

        assert!(args.include_weird);
        assert!(args.california);
        assert_eq!(args.output, Some(PathBuf::from("plates.txt")));
        assert_eq!(args.anomalies, Some(AnomalyPolicy::Fail));
        assert_eq!(args.min_length, Some(4));
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_include_weird_alias() {
        let args = Args::parse_from(["lookalike", "--include-weird", "-f", "w.txt"]);
        assert!(args.include_weird);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_input_required() {
        assert!(Args::try_parse_from(["lookalike"]).is_err());
        assert!(Args::try_parse_from(["lookalike", "-f"]).is_err());
        assert!(Args::try_parse_from(["lookalike", "-o"]).is_err());
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_print_default_config_needs_no_input() {
        let args = Args::parse_from(["lookalike", "--print-default-config"]);
        assert!(args.print_default_config);
        assert!(args.input.is_none());
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_overrides_win_over_settings() {
        let mut settings =
            Settings::from_toml("[filter]\nmin_length = 2\n[output]\npath = \"a.txt\"\n").unwrap();
        let args = Args::parse_from([
            "lookalike",
            "-f",
            "w.txt",
            "--california",
            "-o",
            "b.txt",
        ]);

        apply_overrides(&mut settings, &args);

        let config = settings.to_filter_config();
        assert_eq!(config.min_length, 2);
        assert_eq!(config.max_length, 7);
        assert_eq!(settings.output_path(), std::path::Path::new("b.txt"));
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_california_flag_replaces_settings_max_length() {
        let mut settings = Settings::from_toml("[filter]\nmax_length = 8\n").unwrap();
        let args = Args::parse_from(["lookalike", "-f", "w.txt", "--california"]);

        apply_overrides(&mut settings, &args);

        assert_eq!(settings.to_filter_config().max_length, 7);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_max_length_flag_wins_over_california() {
        let mut settings = Settings::new();
        let args = Args::parse_from([
            "lookalike",
            "-f",
            "w.txt",
            "--california",
            "--max-length",
            "9",
        ]);

        apply_overrides(&mut settings, &args);

        assert_eq!(settings.to_filter_config().max_length, 9);
    }

    // Helper to get a per-test scratch directory
    #[cfg(feature = "cli")]
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "lookalike-cli-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[cfg(feature = "cli")]
    fn path_arg(path: &std::path::Path) -> String {
        path.to_string_lossy().into_owned()
    }

    /// Run the application quietly on `input` with its own settings file.
    /// Returns the run result and the output path.
    #[cfg(feature = "cli")]
    fn run_application(
        dir: &std::path::Path,
        settings: &str,
        input: &str,
        extra: &[&str],
    ) -> (Result<(), Box<dyn std::error::Error>>, PathBuf) {
        let input_path = dir.join("input.txt");
        let settings_path = dir.join("settings.toml");
        let output_path = dir.join("output.txt");
        std::fs::write(&input_path, input).unwrap();
        std::fs::write(&settings_path, settings).unwrap();

        let mut argv = vec![
            "lookalike".to_string(),
            "-q".to_string(),
            "-c".to_string(),
            path_arg(&settings_path),
            "-f".to_string(),
            path_arg(&input_path),
            "-o".to_string(),
            path_arg(&output_path),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));

        let result = Application::new(Args::parse_from(argv)).and_then(|app| app.run());
        (result, output_path)
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_application_writes_sorted_output() {
        let dir = scratch_dir("sorted");
        let (result, output) = run_application(&dir, "", "трактор\nчат\ncar\nкот\n", &[]);

        assert!(result.is_ok());
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "кот KOT\nтрактор TPAKTOP\n"
        );

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_application_truncates_existing_output() {
        let dir = scratch_dir("truncate");
        std::fs::write(dir.join("output.txt"), "stale line\n".repeat(20)).unwrap();

        let (result, output) = run_application(&dir, "", "кот\n", &["--includeWeird"]);

        assert!(result.is_ok());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "кот KOT\n");

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_application_fail_policy_returns_error() {
        let dir = scratch_dir("fail");
        let (result, _) = run_application(&dir, "", "кот\ncar\n", &["--anomalies", "fail"]);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_application_california_over_settings_file() {
        let dir = scratch_dir("california");
        let (result, output) = run_application(
            &dir,
            "[filter]\nmax_length = 8\n",
            "мамаваза\nтрактор\n",
            &["--california"],
        );

        assert!(result.is_ok());
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "трактор TPAKTOP\n"
        );

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_application_missing_input_keeps_output() {
        let dir = scratch_dir("missing-input");
        let settings_path = dir.join("settings.toml");
        let output_path = dir.join("output.txt");
        std::fs::write(&settings_path, "").unwrap();
        std::fs::write(&output_path, "previous run\n").unwrap();

        let args = Args::parse_from([
            "lookalike".to_string(),
            "-q".to_string(),
            "-c".to_string(),
            path_arg(&settings_path),
            "-f".to_string(),
            path_arg(&dir.join("does-not-exist.txt")),
            "-o".to_string(),
            path_arg(&output_path),
        ]);
        let result = Application::new(args).and_then(|app| app.run());

        assert!(result.is_err());
        assert_eq!(
            std::fs::read_to_string(&output_path).unwrap(),
            "previous run\n"
        );

        std::fs::remove_dir_all(dir).ok();
    }
}
