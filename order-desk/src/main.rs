use clap::Parser;
use order_desk::dashboard::{Dashboard, DashboardState};
use order_desk::orders::money::format_currency;
use order_desk::orders::orders_from_config;
use order_desk::utils::time::format_datetime;
use order_desk::{Config, load_dotenv, setup_environment, tui};

/// 電商訂單看板
#[derive(Debug, Parser)]
#[command(name = "order-desk", version, about)]
struct Args {
    /// Order fixture (JSON array); overrides ORDERS_FILE
    #[arg(long, env = "ORDERS_FILE")]
    orders: Option<String>,

    /// Initial status tag, or `all`; overrides DEFAULT_STATUS
    #[arg(long)]
    status: Option<String>,

    /// Initial search text
    #[arg(long)]
    search: Option<String>,

    /// Print the visible orders and tallies instead of opening the dashboard
    #[arg(long)]
    summary: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. 读取 .env 与命令行
    load_dotenv();
    let args = Args::parse();

    // 2. 加载配置
    let mut config = Config::from_env();
    if args.orders.is_some() {
        config.orders_file = args.orders;
    }
    if let Some(status) = args.status {
        config.default_status = status;
    }
    config.validate()?;

    // 3. 日志
    if args.summary {
        setup_environment(&config);
    } else {
        tui::init_tui_logging(&config.log_level);
    }

    // 4. 订单与看板状态
    let orders = orders_from_config(&config)?;
    let mut state = DashboardState::with_status(config.initial_status()?);
    state.filters.search_query = args.search;
    let dashboard = Dashboard::with_state(orders, state);

    if args.summary {
        print_summary(&dashboard);
        return Ok(());
    }

    tui::run(dashboard, config.toast_capacity).await?;
    Ok(())
}

fn print_summary(dashboard: &Dashboard) {
    for count in dashboard.counts().iter().chain(&dashboard.special_counts()) {
        println!("{:<16}{:>4}", count.label, count.count);
    }
    println!();
    for order in dashboard.visible() {
        println!(
            "{}  {:<4}  {}  {:<8}  {:<6}  {:>10}",
            order.order_number,
            order.platform.label(),
            format_datetime(&order.create_date),
            order.status.label(),
            order.customer_name,
            format_currency(order.total_amount)
        );
    }
}
