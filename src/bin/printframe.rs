use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use printframe::{
    ComposeOpts, ComposedImage, CropRegion, CustomerDetails, FrameAsset, FrameRepository,
    JsonFileFrameRepository, OrderPayload, RateTable,
};

#[derive(Parser, Debug)]
#[command(name = "printframe", version)]
struct Cli {
    /// Log debug detail to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the unit price and total for a print order.
    Price(PriceArgs),
    /// Composite a cropped photo under a frame and write a PNG.
    Compose(ComposeCmd),
    /// Composite, price and write the order payload JSON.
    Order(OrderArgs),
    /// Manage stored custom frames.
    #[command(subcommand)]
    Frames(FramesCmd),
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum BuiltinTable {
    /// "10-15", "16-40", ..., "1000+" brackets.
    Ranged,
    /// "<15", "15-40", ..., "1000+" brackets.
    Below,
}

#[derive(Args, Debug)]
struct PriceArgs {
    /// Rate table JSON. Overrides --table.
    #[arg(long, env = "PRINTFRAME_RATES")]
    rates: Option<PathBuf>,

    /// Built-in rate table used when --rates is not given.
    #[arg(long, value_enum, default_value_t = BuiltinTable::Ranged)]
    table: BuiltinTable,

    /// Print category.
    #[arg(long)]
    category: String,

    /// Print size label.
    #[arg(long)]
    size: String,

    /// Number of prints.
    #[arg(long, allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct FrameSel {
    /// Frame image file.
    #[arg(long)]
    frame: Option<PathBuf>,

    /// Built-in or stored custom frame id.
    #[arg(long)]
    frame_id: Option<String>,
}

#[derive(Args, Debug)]
struct ComposeArgs {
    /// Photo image file.
    #[arg(long)]
    photo: PathBuf,

    #[command(flatten)]
    frame: FrameSel,

    /// Crop region in photo pixels: x,y,width,height.
    #[arg(long)]
    crop: Option<CropRegion>,

    /// Output width in pixels.
    #[arg(long, default_value_t = printframe::DEFAULT_OUTPUT_WIDTH)]
    width: u32,

    /// Frame aspect ratio (width / height). Defaults to the frame's own.
    #[arg(long)]
    aspect: Option<f64>,

    /// Directory built-in frame paths are resolved against.
    #[arg(long, default_value = ".")]
    assets_root: PathBuf,

    /// Custom frame store.
    #[arg(long, env = "PRINTFRAME_FRAME_STORE", default_value = "printframe-frames.json")]
    store: PathBuf,
}

#[derive(Args, Debug)]
struct ComposeCmd {
    #[command(flatten)]
    compose: ComposeArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct OrderArgs {
    #[command(flatten)]
    compose: ComposeArgs,

    #[command(flatten)]
    price: PriceArgs,

    /// Customer name.
    #[arg(long, default_value = "")]
    name: String,

    /// Customer phone.
    #[arg(long, default_value = "")]
    phone: String,

    /// Order notes.
    #[arg(long, default_value = "")]
    notes: String,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum FramesCmd {
    /// List built-in and stored frames.
    List(StoreArgs),
    /// Store an image file as a custom frame.
    Add {
        /// Frame image file.
        file: PathBuf,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Remove a stored custom frame.
    Remove {
        /// Frame id.
        id: String,
        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Args, Debug)]
struct StoreArgs {
    /// Custom frame store.
    #[arg(long, env = "PRINTFRAME_FRAME_STORE", default_value = "printframe-frames.json")]
    store: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Price(args) => cmd_price(args),
        Command::Compose(args) => cmd_compose(args),
        Command::Order(args) => cmd_order(args),
        Command::Frames(cmd) => cmd_frames(cmd),
    }
}

fn load_table(args: &PriceArgs) -> anyhow::Result<RateTable> {
    let table = match (&args.rates, args.table) {
        (Some(path), _) => RateTable::from_path(path)?,
        (None, BuiltinTable::Ranged) => RateTable::ranged()?,
        (None, BuiltinTable::Below) => RateTable::below()?,
    };
    Ok(table)
}

fn cmd_price(args: PriceArgs) -> anyhow::Result<()> {
    let table = load_table(&args)?;
    let price = printframe::quote(&table, &args.category, &args.size, args.quantity);
    println!("{}", serde_json::to_string(&price)?);
    Ok(())
}

fn run_compose(args: &ComposeArgs) -> anyhow::Result<ComposedImage> {
    let photo = std::fs::read(&args.photo)
        .with_context(|| format!("read photo '{}'", args.photo.display()))?;

    let (frame_bytes, frame_aspect) = match (&args.frame.frame, &args.frame.frame_id) {
        (Some(path), _) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read frame '{}'", path.display()))?;
            (bytes, None)
        }
        (None, Some(id)) => {
            let repo = JsonFileFrameRepository::open(&args.store)?;
            let frame = printframe::find_frame(&repo, id)
                .with_context(|| format!("unknown frame id '{id}'"))?;
            (frame.load_bytes(&args.assets_root)?, Some(frame.aspect_ratio))
        }
        (None, None) => anyhow::bail!("either --frame or --frame-id is required"),
    };

    let opts = ComposeOpts {
        output_width: args.width,
        frame_aspect: args.aspect.or(frame_aspect),
        ..ComposeOpts::default()
    };
    Ok(printframe::compose(&photo, args.crop, &frame_bytes, &opts)?)
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_compose(args: ComposeCmd) -> anyhow::Result<()> {
    let composed = run_compose(&args.compose)?;
    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, &composed.png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        composed.width,
        composed.height
    );
    Ok(())
}

fn cmd_order(args: OrderArgs) -> anyhow::Result<()> {
    let table = load_table(&args.price)?;
    let composed = run_compose(&args.compose)?;
    let customer = CustomerDetails {
        name: args.name,
        phone: args.phone,
        notes: args.notes,
    };
    let payload = OrderPayload::priced(
        &table,
        customer,
        &args.price.category,
        &args.price.size,
        args.price.quantity,
        &composed,
    )?;
    let json = payload.to_json()?;

    match args.out {
        Some(out) => {
            create_parent_dir(&out)?;
            std::fs::write(&out, json)
                .with_context(|| format!("write order '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frames(cmd: FramesCmd) -> anyhow::Result<()> {
    match cmd {
        FramesCmd::List(store) => {
            let repo = JsonFileFrameRepository::open(&store.store)?;
            for f in printframe::all_frames(&repo) {
                println!("{}\t{}\t{:.4}", f.id, f.display_name, f.aspect_ratio);
            }
        }
        FramesCmd::Add { file, store } => {
            let bytes =
                std::fs::read(&file).with_context(|| format!("read frame '{}'", file.display()))?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            let frame = FrameAsset::from_upload(&name, &bytes);
            let id = frame.id.clone();

            let mut repo = JsonFileFrameRepository::open(&store.store)?;
            repo.save(frame)?;
            println!("{id}");
        }
        FramesCmd::Remove { id, store } => {
            let mut repo = JsonFileFrameRepository::open(&store.store)?;
            repo.remove(&id)?;
        }
    }
    Ok(())
}
