use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::{Args, Parser, Subcommand};
use console::style;
use tokio::io::AsyncRead;
use tracing_subscriber::EnvFilter;

use crate::cipher;
use crate::types::Direction;
use crate::ui::display::{Conversion, RoundTrip, clear_screen, print_banner, show_conversion, show_round_trip, show_success};
use crate::ui::prompt::Prompt;
use crate::worker::{Pipeline, Worker};

#[derive(Args, Clone, Default)]
pub struct PlugArgs {
    /// Plug string A; each character is swapped with the same position of B.
    #[arg(short = 'a', long)]
    plug_a: Option<String>,

    /// Plug string B.
    #[arg(short = 'b', long)]
    plug_b: Option<String>,
}

impl PlugArgs {
    fn pair(&self) -> (Option<&str>, Option<&str>) {
        (self.plug_a.as_deref(), self.plug_b.as_deref())
    }
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Message to convert (prompted for when neither this nor --input is given).
    text: Option<String>,

    /// Convert every line of this file instead ("-" reads stdin).
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    plugs: PlugArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a message, or every line of a file.
    Encode(ConvertArgs),

    /// Decode a message, or every line of a file.
    Decode(ConvertArgs),

    /// Encode a message, decode it again, and show whether it survived.
    Check {
        /// Message to check (prompted for when omitted).
        text: Option<String>,

        #[command(flatten)]
        plugs: PlugArgs,
    },

    /// Start interactive mode.
    Interactive,
}

#[derive(Parser)]
#[command(name = "rotorcrypt", version, about = "Encode printable ASCII with a rotor-and-plugboard cipher. Run without arguments for interactive mode.")]
pub struct App {
    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(if app.verbose { "debug" } else { "warn" }));
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(app)
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Encode(args)) => Self::run_mode(Direction::Encode, args).await,
            Some(Commands::Decode(args)) => Self::run_mode(Direction::Decode, args).await,
            Some(Commands::Check { text, plugs }) => Self::run_check(text, &plugs),
            Some(Commands::Interactive) | None => Self::run_interactive(),
        }
    }

    async fn run_mode(direction: Direction, args: ConvertArgs) -> Result<()> {
        let ConvertArgs { text, input, output, plugs } = args;

        if let Some(input) = input {
            return Self::run_batch(direction, &input, output.as_deref(), plugs).await;
        }

        let text = match text {
            Some(text) => text,
            None => Prompt::message(direction)?,
        };
        let (plug_a, plug_b) = plugs.pair();
        let converted = cipher::convert(&text, direction, plug_a, plug_b).with_context(|| format!("{} failed", direction.label()))?;

        match output {
            Some(path) => {
                tokio::fs::write(&path, format!("{converted}\n")).await.with_context(|| format!("failed to write {}", path.display()))?;
                show_success(direction, 1, Some(&path));
            }
            None => println!("{converted}"),
        }

        Ok(())
    }

    async fn run_batch(direction: Direction, input: &Path, output: Option<&Path>, plugs: PlugArgs) -> Result<()> {
        let pipeline = Pipeline::new(direction, plugs.plug_a, plugs.plug_b).context("invalid plugboard")?;
        let worker = Worker::new(pipeline).with_progress(output.is_some() && std::io::stderr().is_terminal());

        let reader: Box<dyn AsyncRead + Unpin + Send> = if input == Path::new("-") {
            Box::new(tokio::io::stdin())
        } else {
            Box::new(tokio::fs::File::open(input).await.with_context(|| format!("failed to open {}", input.display()))?)
        };

        let lines = match output {
            Some(path) => {
                let file = tokio::fs::File::create(path).await.with_context(|| format!("failed to create {}", path.display()))?;
                worker.process(reader, file).await
            }
            None => worker.process(reader, tokio::io::stdout()).await,
        }
        .with_context(|| format!("{} failed: {}", direction.label(), input.display()))?;

        show_success(direction, lines, output);
        Ok(())
    }

    fn run_check(text: Option<String>, plugs: &PlugArgs) -> Result<()> {
        let text = match text {
            Some(text) => text,
            None => Prompt::message(Direction::Encode)?,
        };
        let (plug_a, plug_b) = plugs.pair();

        let encoded = cipher::encode(&text, plug_a, plug_b).context("Encode failed")?;
        let decoded = cipher::decode(&encoded, plug_a, plug_b).context("Decode failed")?;

        let round_trip = RoundTrip { input: &text, encoded: &encoded, decoded: &decoded };
        show_round_trip(&round_trip, plug_a, plug_b);
        ensure!(round_trip.passed(), "round trip did not reproduce the input");

        Ok(())
    }

    fn run_interactive() -> Result<()> {
        clear_screen()?;
        print_banner()?;

        loop {
            let direction = Prompt::select_direction()?;
            let text = Prompt::message(direction)?;
            let plug_a = Prompt::plug("A")?;
            let plug_b = Prompt::plug("B")?;

            match cipher::convert(&text, direction, plug_a.as_deref(), plug_b.as_deref()) {
                Ok(output) => show_conversion(&Conversion { direction, input: &text, output: &output }, plug_a.as_deref(), plug_b.as_deref()),
                Err(e) => eprintln!("{} {}", style("✗").red(), style(e).bold()),
            }

            if !Prompt::confirm_another()? {
                return Ok(());
            }
        }
    }
}
