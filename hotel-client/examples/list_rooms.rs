// hotel-client/examples/list_rooms.rs
// Log in and page through a hotel's rooms

use hotel_client::{ClientConfig, FilterModel, FilterSet, HotelClient, Pager, Sort};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password> [hotel_id]", args[0]);
        println!("  Gateway is read from GATEWAY_URL (default http://localhost:8080)");
        return Ok(());
    }

    let client = HotelClient::new(ClientConfig::from_env()?)?;
    let account = client.account();
    if !account.is_authenticated() {
        account.login(&args[1], &args[2]).await?;
    }
    tracing::info!(user = ?client.session().username(), "Session ready");

    let mut filters = FilterSet::new();
    if let Some(hotel_id) = args.get(3) {
        filters.upsert(FilterModel::from_key("hotel.id.equals", hotel_id.parse::<i64>()?)?);
    }

    let rooms = client.rooms();
    let mut pager = Pager::new(6)?;
    loop {
        let criteria = pager
            .criteria()
            .sorted_by(Sort::desc("id")?)
            .with_filters(filters.clone());
        let page = rooms.paginated_list(&criteria).await?;
        pager.apply_page(&page);

        println!("Page {}/{}", pager.current_page(), pager.total_pages());
        for room in &page.items {
            println!("  #{} {} ({})", room.number, room.hotel.name, room.room_type.name);
        }

        if !pager.next() {
            break;
        }
    }

    Ok(())
}
