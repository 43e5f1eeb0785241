use crate::infra::InMemoryCartStore;
use clap::Args;
use std::sync::Arc;
use vo_rates::error::AppError;
use vo_rates::quoting::{Category, QuoteParams, QuoteService, QuoteServiceError};

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Category id (see `rates categories`)
    #[arg(long)]
    pub(crate) category: String,
    /// Sub-type name within the category
    #[arg(long)]
    pub(crate) sub_type: String,
    /// Usage term (e.g. "1 Year", "13 weeks")
    #[arg(long)]
    pub(crate) term: Option<String>,
    /// Usage tier (e.g. "Tier 2")
    #[arg(long)]
    pub(crate) tier: Option<String>,
    /// Market size (e.g. "large")
    #[arg(long)]
    pub(crate) market: Option<String>,
    /// Number of tags
    #[arg(long)]
    pub(crate) tags: Option<f64>,
    /// Number of spots
    #[arg(long)]
    pub(crate) spots: Option<f64>,
    /// Word count
    #[arg(long)]
    pub(crate) words: Option<f64>,
    /// Finished minutes
    #[arg(long)]
    pub(crate) minutes: Option<f64>,
    /// Session, studio, or finished hours depending on the sub-type
    #[arg(long)]
    pub(crate) hours: Option<f64>,
    /// Number of character voices
    #[arg(long)]
    pub(crate) voices: Option<f64>,
    /// Number of IVR prompts
    #[arg(long)]
    pub(crate) prompts: Option<f64>,
    /// Number of podcast episodes
    #[arg(long)]
    pub(crate) episodes: Option<f64>,
}

impl ResolveArgs {
    fn params(&self) -> QuoteParams {
        QuoteParams {
            term: self.term.clone(),
            tier: self.tier.clone(),
            market: self.market.clone(),
            number_of_tags: self.tags,
            number_of_spots: self.spots,
            word_count: self.words,
            number_of_minutes: self.minutes,
            number_of_hours: self.hours,
            number_of_voices: self.voices,
            number_of_prompts: self.prompts,
            number_of_episodes: self.episodes,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the cart CSV export at the end of the demo
    #[arg(long)]
    pub(crate) include_export: bool,
    /// Skip the cart portion of the demo
    #[arg(long)]
    pub(crate) skip_cart: bool,
}

pub(crate) fn run_categories() -> Result<(), AppError> {
    println!("Rate catalog");
    for category in Category::all() {
        println!("- {} ({})", category.label(), category.id());
        for sub_type in category.sub_types() {
            println!("    {sub_type}");
        }
    }
    Ok(())
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let service = build_service();
    let params = args.params();

    match service.resolve(&args.category, &args.sub_type, &params) {
        Some(entry) if entry.is_informational() => {
            println!("{}", entry.description);
            println!("  {}", entry.text);
            println!("  (guidance only; this entry cannot join a quote)");
        }
        Some(entry) => {
            println!("{}", entry.description);
            println!("  {}", entry.text);
        }
        None => {
            println!("No rate computed; provide more information for this selection.");
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_service();

    println!("Rate quoting demo");

    let selections: Vec<(&str, &str, QuoteParams)> = vec![
        (
            "radio",
            "Local – Regional (Terrestrial)",
            QuoteParams {
                term: Some("1 Year".to_string()),
                ..QuoteParams::default()
            },
        ),
        (
            "digital_visual",
            "Digital Tags",
            QuoteParams {
                number_of_tags: Some(3.0),
                ..QuoteParams::default()
            },
        ),
        (
            "non_broadcast",
            "Corporate & Industrial Narration – Recording Time Scale",
            QuoteParams {
                number_of_hours: Some(3.0),
                ..QuoteParams::default()
            },
        ),
        ("tv", "Mnemonics", QuoteParams::default()),
    ];

    println!("\nResolved rates");
    for (category, sub_type, params) in &selections {
        match service.resolve(category, sub_type, params) {
            Some(entry) => println!("- {}: {}", entry.description, entry.text),
            None => println!("- {category}/{sub_type}: no rate computed"),
        }
    }

    if args.skip_cart {
        return Ok(());
    }

    println!("\nBuilding a quote");
    let mut first_item_id = None;
    for (category, sub_type, params) in &selections {
        match service.add_to_cart(category, sub_type, params) {
            Ok(item) => {
                println!("- added {} ({})", item.description, item.rate);
                first_item_id.get_or_insert(item.id);
            }
            Err(QuoteServiceError::NotQuotable) => {
                println!("- skipped {sub_type}: guidance only, not addable");
            }
            Err(err) => println!("- skipped {sub_type}: {err}"),
        }
    }

    let cart = service.cart()?;
    println!(
        "Cart: {} item(s), total {}",
        cart.items.len(),
        cart.total_text
    );

    if let Some(id) = first_item_id {
        let removed = service.remove_from_cart(&id)?;
        let cart = service.cart()?;
        println!(
            "Removed first item ({}): {} item(s) remain, total {}",
            removed,
            cart.items.len(),
            cart.total_text
        );
    }

    if args.include_export {
        println!("\nCart export");
        print!("{}", service.cart_export()?);
    }

    Ok(())
}

fn build_service() -> Arc<QuoteService<InMemoryCartStore>> {
    Arc::new(QuoteService::new(Arc::new(InMemoryCartStore::default())))
}
