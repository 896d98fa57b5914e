mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use storefront::config::ConfigError;
use storefront::net::error::TransportError;
use storefront::net::types::{ContactForm, NewTestimonial, PaymentMethod};
use storefront::net::{OrderQuery, ProductQuery, TestimonialQuery};
use storefront::pages::ActionError;
use storefront::pages::checkout::{CheckoutForm, CheckoutOutcome, CheckoutPage};
use storefront::pages::login::LoginPage;
use storefront::pages::register::{RegisterForm, RegisterPage};
use storefront::state::storage::StoreError;
use storefront::{ApiClient, ApiConfig, ApiError, FileTokenStore, Scope};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Action(#[from] ActionError),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("http client init failed: {0}")]
    Transport(#[from] TransportError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("your cart is empty")]
    EmptyCart,
}

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront API command-line client")]
struct Cli {
    /// Overrides STOREFRONT_API_BASE_URL from the environment.
    #[arg(long)]
    base_url: Option<String>,

    /// Directory holding the persisted auth token.
    #[arg(long, env = "STOREFRONT_STATE_DIR", default_value = ".storefront")]
    state_dir: PathBuf,

    /// Print raw JSON instead of the text rendering.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        email: String,
        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register(RegisterArgs),
    Logout,
    Whoami,
    Products(ProductsCommand),
    Categories(CategoriesCommand),
    Cart(CartCommand),
    Orders(OrdersCommand),
    Newsletter(NewsletterCommand),
    Testimonials(TestimonialsCommand),
    Contact(ContactCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

#[derive(Args, Debug)]
struct PageArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Args, Debug)]
struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductsSubcommand {
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sort: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    Show {
        id: String,
    },
    Search {
        query: String,
        #[arg(long)]
        sort: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    BestSellers {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CategoriesSubcommand {
    List,
    Show {
        slug: String,
    },
    Featured {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Subcommand, Debug)]
enum CartSubcommand {
    Show,
    Add {
        product_id: String,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        variant: Option<String>,
    },
    Update {
        item_id: String,
        quantity: u32,
    },
    Remove {
        item_id: String,
    },
    Clear,
    Coupon {
        code: String,
    },
}

#[derive(Args, Debug)]
struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Subcommand, Debug)]
enum OrdersSubcommand {
    List {
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    Show {
        id: String,
    },
    Cancel {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    Track {
        id: String,
    },
    Place(PlaceOrderArgs),
}

#[derive(Args, Debug)]
struct PlaceOrderArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    city: String,
    #[arg(long)]
    state: String,
    #[arg(long)]
    pincode: String,
    #[arg(long, default_value = "cod", value_parser = parse_payment_method)]
    payment_method: PaymentMethod,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Args, Debug)]
struct NewsletterCommand {
    #[command(subcommand)]
    command: NewsletterSubcommand,
}

#[derive(Subcommand, Debug)]
enum NewsletterSubcommand {
    Subscribe {
        email: String,
    },
    Unsubscribe {
        email: String,
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Args, Debug)]
struct TestimonialsCommand {
    #[command(subcommand)]
    command: TestimonialsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TestimonialsSubcommand {
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        featured: Option<bool>,
    },
    Submit {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        #[arg(long)]
        text: String,
        #[arg(long)]
        product_id: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ContactCommand {
    #[command(subcommand)]
    command: ContactSubcommand,
}

#[derive(Subcommand, Debug)]
enum ContactSubcommand {
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    Faq {
        #[arg(long)]
        category: Option<String>,
    },
}

fn parse_payment_method(raw: &str) -> Result<PaymentMethod, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_ascii_lowercase()))
        .map_err(|_| format!("unknown payment method `{raw}` (expected card, upi, cod or netbanking)"))
}

struct CliContext {
    scope: Scope,
    json: bool,
}

impl CliContext {
    fn api(&self) -> &ApiClient {
        self.scope.api()
    }

    /// Print `value` as pretty JSON with `--json`, else its text rendering.
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.base_url {
        Some(base_url) => {
            let mut config = ApiConfig::from_env()?;
            config.base_url = ApiConfig::with_base_url(base_url)?.base_url;
            config
        }
        None => ApiConfig::from_env()?,
    };
    let tokens = Arc::new(FileTokenStore::new(&cli.state_dir));
    let api = ApiClient::new(&config, tokens)?;
    tracing::debug!(base_url = api.base_url(), state_dir = %cli.state_dir.display(), "storefront cli");
    let ctx = CliContext { scope: Scope::with_session(api), json: cli.json };

    match cli.command {
        Command::Login { email, password } => run_login(&ctx, &email, &password).await,
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Logout => {
            ctx.scope.session().logout(ctx.api()).await?;
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&ctx).await,
        Command::Products(products) => run_products(&ctx, products.command).await,
        Command::Categories(categories) => run_categories(&ctx, categories.command).await,
        Command::Cart(cart) => run_cart(&ctx, cart.command).await,
        Command::Orders(orders) => run_orders(&ctx, orders.command).await,
        Command::Newsletter(newsletter) => run_newsletter(&ctx, newsletter.command).await,
        Command::Testimonials(testimonials) => run_testimonials(&ctx, testimonials.command).await,
        Command::Contact(contact) => run_contact(&ctx, contact.command).await,
    }
}

async fn run_login(ctx: &CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let mut page = LoginPage::new(ctx.scope.clone());
    let user = page.submit(email, password).await?;
    ctx.emit(&user, |user| format!("logged in as {}", user.display_name()))
}

async fn run_register(ctx: &CliContext, args: RegisterArgs) -> Result<(), CliError> {
    let form = RegisterForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        password: args.password,
        confirm_password: args.confirm_password,
    };
    let mut page = RegisterPage::new(ctx.scope.clone());
    let user = page.submit(&form).await?;
    ctx.emit(&user, |user| format!("registered and logged in as {}", user.display_name()))
}

async fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    let session = ctx.scope.session();
    session.restore(ctx.api()).await;
    match session.user() {
        Some(user) => ctx.emit(&user, render::user),
        None => {
            println!("not logged in");
            Ok(())
        }
    }
}

async fn run_products(ctx: &CliContext, command: ProductsSubcommand) -> Result<(), CliError> {
    let api = ctx.api();
    match command {
        ProductsSubcommand::List { category, sort, paging } => {
            let query = ProductQuery { page: paging.page, limit: paging.limit, sort, category };
            ctx.emit(&api.get_all_products(&query).await?, render::product_list)
        }
        ProductsSubcommand::Show { id } => ctx.emit(&api.get_product_by_id(&id).await?, render::product),
        ProductsSubcommand::Search { query, sort, paging } => {
            let filters = ProductQuery { page: paging.page, limit: paging.limit, sort, category: None };
            ctx.emit(&api.search_products(&query, &filters).await?, render::product_list)
        }
        ProductsSubcommand::BestSellers { limit } => {
            ctx.emit(&api.get_best_sellers(limit).await?, render::product_list)
        }
    }
}

async fn run_categories(ctx: &CliContext, command: CategoriesSubcommand) -> Result<(), CliError> {
    let api = ctx.api();
    match command {
        CategoriesSubcommand::List => ctx.emit(&api.get_all_categories().await?, render::category_list),
        CategoriesSubcommand::Show { slug } => {
            ctx.emit(&api.get_category_by_slug(&slug).await?, render::category)
        }
        CategoriesSubcommand::Featured { limit } => {
            ctx.emit(&api.get_featured_categories(limit).await?, render::category_list)
        }
    }
}

async fn run_cart(ctx: &CliContext, command: CartSubcommand) -> Result<(), CliError> {
    let api = ctx.api();
    match command {
        CartSubcommand::Show => ctx.emit(&api.get_cart().await?, render::cart),
        CartSubcommand::Add { product_id, quantity, variant } => {
            let update = api.add_to_cart(&product_id, quantity, variant.as_deref()).await?;
            ctx.emit(&update, render::cart_update)
        }
        CartSubcommand::Update { item_id, quantity } => {
            ctx.emit(&api.update_cart_item(&item_id, quantity).await?, render::cart_update)
        }
        CartSubcommand::Remove { item_id } => {
            ctx.emit(&api.remove_from_cart(&item_id).await?, render::cart_update)
        }
        CartSubcommand::Clear => ctx.emit(&api.clear_cart().await?, |ack| render::ack(ack, "cart cleared")),
        CartSubcommand::Coupon { code } => ctx.emit(&api.apply_coupon(&code).await?, render::cart_update),
    }
}

async fn run_orders(ctx: &CliContext, command: OrdersSubcommand) -> Result<(), CliError> {
    let api = ctx.api();
    match command {
        OrdersSubcommand::List { status, paging } => {
            let query = OrderQuery { page: paging.page, limit: paging.limit, status };
            ctx.emit(&api.get_orders(&query).await?, render::order_list)
        }
        OrdersSubcommand::Show { id } => ctx.emit(&api.get_order_by_id(&id).await?, render::order),
        OrdersSubcommand::Cancel { id, reason } => {
            let update = api.cancel_order(&id, reason.as_deref()).await?;
            ctx.emit(&update, |update| render::order_update(update, "order cancelled"))
        }
        OrdersSubcommand::Track { id } => ctx.emit(&api.track_order(&id).await?, render::tracking),
        OrdersSubcommand::Place(args) => run_place_order(ctx, args).await,
    }
}

async fn run_place_order(ctx: &CliContext, args: PlaceOrderArgs) -> Result<(), CliError> {
    let page = CheckoutPage::new(ctx.scope.clone());
    match page.load().await {
        CheckoutOutcome::RedirectToCart => return Err(CliError::EmptyCart),
        CheckoutOutcome::Continue | CheckoutOutcome::OrderPlaced(_) => {}
    }
    if let Some(message) = page.state().error() {
        return Err(ActionError(message.to_owned()).into());
    }

    let form = CheckoutForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        city: args.city,
        state: args.state,
        pincode: args.pincode,
        payment_method: args.payment_method,
        payment_details: None,
        notes: args.notes,
    };
    match page.place_order(&form).await? {
        CheckoutOutcome::OrderPlaced(Some(order)) => ctx.emit(&order, render::order),
        CheckoutOutcome::OrderPlaced(None) => {
            println!("order placed");
            Ok(())
        }
        CheckoutOutcome::RedirectToCart => Err(CliError::EmptyCart),
        CheckoutOutcome::Continue => Ok(()),
    }
}

async fn run_newsletter(ctx: &CliContext, command: NewsletterSubcommand) -> Result<(), CliError> {
    let api = ctx.api();
    match command {
        NewsletterSubcommand::Subscribe { email } => {
            ctx.emit(&api.subscribe_newsletter(&email).await?, |ack| render::ack(ack, "subscribed"))
        }
        NewsletterSubcommand::Unsubscribe { email, token } => {
            let ack = api.unsubscribe_newsletter(&email, token.as_deref()).await?;
            ctx.emit(&ack, |ack| render::ack(ack, "unsubscribed"))
        }
    }
}

async fn run_testimonials(ctx: &CliContext, command: TestimonialsSubcommand) -> Result<(), CliError> {
    let api = ctx.api();
    match command {
        TestimonialsSubcommand::List { limit, featured } => {
            let list = api.get_testimonials(TestimonialQuery { limit, featured }).await?;
            ctx.emit(&list, render::testimonial_list)
        }
        TestimonialsSubcommand::Submit { rating, text, product_id } => {
            let submission = api.submit_testimonial(&NewTestimonial { rating, text, product_id }).await?;
            ctx.emit(&submission, |s| render::ack_text(s.success, s.message.as_deref(), "testimonial submitted"))
        }
    }
}

async fn run_contact(ctx: &CliContext, command: ContactSubcommand) -> Result<(), CliError> {
    let api = ctx.api();
    match command {
        ContactSubcommand::Send { name, email, phone, subject, message } => {
            let form = ContactForm { name, email, phone, subject, message };
            ctx.emit(&api.submit_contact_form(&form).await?, render::contact_receipt)
        }
        ContactSubcommand::Faq { category } => ctx.emit(&api.get_faqs(category.as_deref()).await?, render::faq_list),
    }
}
