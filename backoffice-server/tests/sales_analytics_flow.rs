//! End-to-end flow: seed the embedded database through the repositories,
//! then generate reports through the real SurrealDB-backed record source.
//! Run: cargo test -p backoffice-server --test sales_analytics_flow

use chrono::NaiveDate;

use backoffice_server::analytics::{self, PeriodKind, ReportRequest, ReportScope};
use backoffice_server::db::DbService;
use backoffice_server::db::repository::{
    RegisterCloseRepository, RepoError, SalesRecordRepository, TransactionLineRepository,
};
use shared::models::{RegisterCloseSummaryCreate, TransactionLineCreate};

async fn open_db(tmp: &tempfile::TempDir) -> DbService {
    let path = tmp.path().join("backoffice.db");
    DbService::new(&path.to_string_lossy()).await.unwrap()
}

fn line(date: &str, store: i64, product: &str, category: Option<&str>, amount: f64) -> TransactionLineCreate {
    TransactionLineCreate {
        date: date.to_string(),
        store_id: store,
        product_name: product.to_string(),
        category_name: category.map(|c| c.to_string()),
        quantity: 1,
        unit_price: amount,
        sales_amount: amount,
    }
}

fn close(date: &str, store: i64, customers: i64, sales: f64) -> RegisterCloseSummaryCreate {
    RegisterCloseSummaryCreate {
        date: date.to_string(),
        store_id: store,
        groups_count: customers,
        customer_count: customers,
        male_count: 0,
        female_count: 0,
        unspecified_count: 0,
        total_sales: sales,
        net_sales: sales,
        cash_amount: sales,
        credit_amount: 0.0,
        point_amount: 0.0,
        electronic_money_amount: 0.0,
    }
}

fn month_of(y: i32, m: u32, d: u32) -> ReportRequest {
    ReportRequest {
        scope: ReportScope::Period {
            kind: PeriodKind::Month,
            anchor: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        },
        store_id: None,
    }
}

#[tokio::test]
async fn full_report_from_seeded_database() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;

    let lines = TransactionLineRepository::new(db.db.clone());
    let closes = RegisterCloseRepository::new(db.db.clone());

    lines.create(line("2024-05-01", 1, "A", Some("food"), 100.0)).await.unwrap();
    lines.create(line("2024-05-01", 1, "B", Some("drink"), 50.0)).await.unwrap();
    lines.create(line("2024-05-02", 1, "A", Some("food"), 75.0)).await.unwrap();
    // Outside the requested month, must not leak in
    lines.create(line("2024-04-30", 1, "A", Some("food"), 999.0)).await.unwrap();

    closes.create(close("2024-05-01", 1, 5, 150.0)).await.unwrap();

    let source = SalesRecordRepository::new(db.db.clone());
    let report = analytics::generate_report(&source, &month_of(2024, 5, 15))
        .await
        .unwrap();

    // Register closes win the customer count (5 > 2 visit days),
    // transaction lines win the sales total (225 > 150)
    assert_eq!(report.total_customers, 5);
    assert_eq!(report.total_sales, 225);
    assert_eq!(report.average_customer_value, 45);

    assert_eq!(report.product_composition[0].name, "A");
    assert_eq!(report.product_composition[0].sales, 175);
    assert_eq!(report.daily_sales.len(), 2);

    assert_eq!(report.register_close_summary.total_customers, 5);
    assert_eq!(report.register_close_summary.payment_methods.cash, 150);

    assert_eq!(report.comparison.sales_record_customers, 2);
    assert_eq!(report.comparison.register_close_customers, 5);
    assert_eq!(report.comparison.difference, 3);
}

#[tokio::test]
async fn previous_period_read_from_same_tables() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;

    let lines = TransactionLineRepository::new(db.db.clone());
    lines.create(line("2024-04-10", 1, "A", None, 100.0)).await.unwrap();
    lines.create(line("2024-05-05", 1, "A", None, 300.0)).await.unwrap();

    let source = SalesRecordRepository::new(db.db.clone());
    let report = analytics::generate_report(&source, &month_of(2024, 5, 15))
        .await
        .unwrap();

    let detail = report.comparison_detail.unwrap();
    assert_eq!(detail.label, "month-over-month");
    assert_eq!(detail.prev.total_sales, 100);
    assert_eq!(detail.diff.total_sales, 200);
    assert_eq!(detail.percent.total_sales, 200.0);
}

#[tokio::test]
async fn store_filter_applies_at_the_query_layer() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;

    let lines = TransactionLineRepository::new(db.db.clone());
    lines.create(line("2024-05-01", 1, "A", None, 100.0)).await.unwrap();
    lines.create(line("2024-05-01", 2, "A", None, 900.0)).await.unwrap();

    let source = SalesRecordRepository::new(db.db.clone());
    let mut request = month_of(2024, 5, 1);
    request.store_id = Some(1);

    let report = analytics::generate_report(&source, &request).await.unwrap();
    assert_eq!(report.total_sales, 100);
}

#[tokio::test]
async fn empty_database_yields_zero_report() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;

    let source = SalesRecordRepository::new(db.db.clone());
    let report = analytics::generate_report(&source, &month_of(2024, 5, 15))
        .await
        .unwrap();

    assert_eq!(report, shared::models::AnalyticsReport::empty());
}

#[tokio::test]
async fn duplicate_register_close_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;

    let closes = RegisterCloseRepository::new(db.db.clone());
    closes.create(close("2024-05-01", 1, 5, 150.0)).await.unwrap();

    let second = closes.create(close("2024-05-01", 1, 8, 200.0)).await;
    assert!(matches!(second, Err(RepoError::Duplicate(_))));

    // A different store on the same date is fine
    closes.create(close("2024-05-01", 2, 3, 90.0)).await.unwrap();
}

#[tokio::test]
async fn negative_sales_amount_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;

    let lines = TransactionLineRepository::new(db.db.clone());
    let res = lines.create(line("2024-05-01", 1, "A", None, -10.0)).await;
    assert!(matches!(res, Err(RepoError::Validation(_))));
}
