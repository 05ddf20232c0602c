// src/cli.rs
//
// Terminal front-end. Reads go straight to the gateway; anything that saves a
// file runs through a Session so names and messages match the GUI.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};

use crate::{
    config::options::AppOptions,
    file::{self, Downloads},
    gateway::{Gateway, HttpGateway},
    model::{Ancestors, DataType, DateType, DownloadType, GeographicalUnit, Level, SearchMode},
    selection::Selection,
    session::{Job, Session},
};

#[derive(Parser)]
#[command(name = "ecourts", version, about = "eCourts case search, cause lists and court data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API base URL (default: $ECOURTS_API_URL or http://127.0.0.1:5000).
    #[arg(long, value_name = "URL", global = true)]
    pub api: Option<String>,

    /// Directory for saved files (default: $ECOURTS_OUT_DIR or ./downloads).
    #[arg(long, value_name = "DIR", global = true)]
    pub out: Option<PathBuf>,

    /// Request timeout in seconds; 0 waits forever.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that the API server answers.
    Health,
    /// Look up a case by CNR or by type/number/year.
    Search(SearchArgs),
    /// Save today's or tomorrow's cause list.
    CauseList {
        #[arg(value_enum)]
        when: WhenArg,
    },
    /// Save the cause list of one court, or all courts of a complex.
    CourtCauseList(CourtArgs),
    /// Print the selectable options of one level.
    Options(OptionsArgs),
    /// Print a full listing.
    Listing {
        #[arg(value_enum)]
        kind: DataTypeArg,
    },
    /// Save a JSON export.
    Export {
        #[arg(value_enum)]
        kind: DataTypeArg,
    },
    /// Print the geographical summary.
    Geo {
        /// Also save the full document.
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(long, conflicts_with_all = ["case_type", "case_number", "case_year"])]
    pub cnr: Option<String>,
    #[arg(long)]
    pub case_type: Option<String>,
    #[arg(long)]
    pub case_number: Option<String>,
    #[arg(long)]
    pub case_year: Option<String>,
}

#[derive(Args)]
pub struct CourtArgs {
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub district: String,
    #[arg(long)]
    pub complex: String,
    /// Required for --type single.
    #[arg(long)]
    pub court: Option<String>,
    /// YYYY-MM-DD, today or later.
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long = "type", value_enum, default_value = "all")]
    pub kind: DownloadTypeArg,
}

#[derive(Args)]
pub struct OptionsArgs {
    #[arg(value_enum)]
    pub level: LevelArg,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub district: Option<String>,
    #[arg(long)]
    pub complex: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WhenArg { Today, Tomorrow }

#[derive(Clone, Copy, ValueEnum)]
pub enum DownloadTypeArg { Single, All, Complex }

#[derive(Clone, Copy, ValueEnum)]
pub enum DataTypeArg { States, Districts, Taluks }

#[derive(Clone, Copy, ValueEnum)]
pub enum LevelArg { States, Districts, Complexes, Courts }

impl From<WhenArg> for DateType {
    fn from(v: WhenArg) -> Self {
        match v {
            WhenArg::Today => DateType::Today,
            WhenArg::Tomorrow => DateType::Tomorrow,
        }
    }
}

impl From<DownloadTypeArg> for DownloadType {
    fn from(v: DownloadTypeArg) -> Self {
        match v {
            DownloadTypeArg::Single => DownloadType::Single,
            DownloadTypeArg::All => DownloadType::All,
            DownloadTypeArg::Complex => DownloadType::Complex,
        }
    }
}

impl From<DataTypeArg> for DataType {
    fn from(v: DataTypeArg) -> Self {
        match v {
            DataTypeArg::States => DataType::States,
            DataTypeArg::Districts => DataType::Districts,
            DataTypeArg::Taluks => DataType::Taluks,
        }
    }
}

impl From<LevelArg> for Level {
    fn from(v: LevelArg) -> Self {
        match v {
            LevelArg::States => Level::State,
            LevelArg::Districts => Level::District,
            LevelArg::Complexes => Level::CourtComplex,
            LevelArg::Courts => Level::Court,
        }
    }
}

impl Cli {
    /// Environment defaults with the command-line flags on top.
    pub fn app_options(&self) -> AppOptions {
        let mut opts = AppOptions::from_env();
        if let Some(url) = &self.api {
            opts.api.set_base_url(url);
        }
        if let Some(dir) = &self.out {
            opts.export.set_dir(&dir.to_string_lossy());
        }
        match self.timeout {
            Some(0) => opts.api.timeout = None,
            Some(n) => opts.api.timeout = Some(Duration::from_secs(n)),
            None => {}
        }
        opts
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let opts = cli.app_options();
    let gateway = HttpGateway::new(&opts.api)?;
    let downloads = Downloads::new(opts.export.out_dir());
    logd!("CLI: api={}, out={}", gateway.base_url(), downloads.dir().display());

    run_with(cli.command, &gateway, &downloads)
}

/// Execute one command against any gateway.
pub fn run_with(command: Command, gateway: &dyn Gateway, downloads: &Downloads) -> Result<()> {
    let mut session = Session::new();

    match command {
        Command::Health => {
            gateway.health().map_err(|e| eyre!(e.user_message()))?;
            println!("Server Online");
            Ok(())
        }

        Command::Search(args) => {
            let form = &mut session.form;
            match args.cnr {
                Some(cnr) => {
                    form.mode = SearchMode::Cnr;
                    form.cnr = cnr;
                }
                None => {
                    form.mode = SearchMode::Details;
                    form.case_type = args.case_type.unwrap_or_default();
                    form.case_number = args.case_number.unwrap_or_default();
                    form.case_year = args.case_year.unwrap_or_default();
                }
            }
            if let Some(job) = session.begin_search() {
                session.dispatch(job, gateway, downloads);
            }
            if let Some(result) = session.result() {
                for (label, value) in result.rows() {
                    println!("{label:<15} {value}");
                }
            }
            finish(&session)
        }

        Command::CauseList { when } => {
            if let Some(job) = session.begin_quick_download(when.into()) {
                session.dispatch(job, gateway, downloads);
            }
            finish(&session)
        }

        Command::CourtCauseList(args) => {
            let kind: DownloadType = args.kind.into();
            if !session.set_date(args.date) {
                return finish(&session);
            }
            let mut sel = Selection::new()
                .with_state(&args.state)
                .with_district(&args.district)
                .with_court_complex(&args.complex)
                .with_date(args.date);
            if let Some(court) = &args.court {
                sel = sel.with_court(court);
            }
            let request = sel
                .cause_list_request(kind)
                .ok_or_else(|| eyre!("--court is required for --type single"))?;
            let job = Job::CourtCauseList {
                file_name: file::court_cause_list_name(kind, request.date),
                request,
            };
            session.dispatch(job, gateway, downloads);
            finish(&session)
        }

        Command::Options(args) => {
            let level: Level = args.level.into();
            let ancestors = Ancestors {
                state_code: args.state,
                district_code: args.district,
                court_complex_code: args.complex,
            };
            let mut above = Level::ALL.into_iter().filter(|l| *l < level);
            if let Some(missing) = above.find(|l| ancestors.get(*l).is_none()) {
                return Err(eyre!("{} code is required for {}", missing.label(), level.plural_key().replace('_', " ")));
            }
            let units = gateway.fetch_options(level, &ancestors).map_err(|e| eyre!(e.user_message()))?;
            print_units(&units, Some(level));
            Ok(())
        }

        Command::Listing { kind } => {
            let kind: DataType = kind.into();
            let units = gateway
                .listing(kind)
                .map_err(|e| eyre!("Failed to load {kind}: {}", e.user_message()))?;
            print_units(&units, None);
            Ok(())
        }

        Command::Export { kind } => {
            if let Some(job) = session.begin_export(kind.into()) {
                session.dispatch(job, gateway, downloads);
            }
            finish(&session)
        }

        Command::Geo { save } => {
            if let Some(job) = session.begin_geographical_data() {
                session.dispatch(job, gateway, downloads);
            }
            if let Some(geo) = session.geographical() {
                if let Some(n) = geo.total_states() { println!("States:    {n}"); }
                if let Some(n) = geo.total_districts() { println!("Districts: {n}"); }
            }
            if save && session.error().is_none() {
                session.save_geographical(downloads);
            }
            finish(&session)
        }
    }
}

/// One `code<TAB>label` line per unit.
fn print_units(units: &[GeographicalUnit], level: Option<Level>) {
    for u in units {
        let label = level.map_or_else(|| u.name.clone(), |l| u.label(l));
        println!("{}\t{}", u.code, label);
    }
}

/// Turn the session's last message into the process result.
fn finish(session: &Session) -> Result<()> {
    if let Some(err) = session.error() {
        return Err(eyre!(s!(err)));
    }
    if let Some(msg) = session.notice() {
        println!("{msg}");
    }
    Ok(())
}
