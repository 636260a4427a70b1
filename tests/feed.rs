use std::error::Error;

use async_trait::async_trait;

use tourney_board::client::load_schedule_from;
use tourney_board::schedule::{self, Filter};
use tourney_board::traits::FeedSource;

/// A canned in-memory feed, standing in for the remote spreadsheet
struct CannedFeed {
    body: String,
}

#[async_trait]
impl FeedSource for CannedFeed {
    async fn fetch_raw(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.body.clone())
    }
}

/// Wrap a JSON payload in the gviz framing the real endpoint emits
fn framed(payload: &str) -> String {
    format!("/*O_o*/\ngoogle.visualization.Query.setResponse({});", payload)
}

const TWO_ROW_PAYLOAD: &str = r#"{"table":{"rows":[
    {"c":[null,
          {"v":"Tuesday"},
          {"v":"Date(2025,9,28)"},
          {"v":"Date(1899,11,30,14,30,0)"},
          {"v":false},
          {"v":"Smash Open"},
          {"v":"Org1"},
          {"v":"City Gym"},
          {"v":"Metro"},
          {"v":""},
          {"v":""}]},
    {"c":[null,
          {"v":""},
          {"v":"Date(2025,9,20)"},
          {"v":""},
          {"v":true},
          {"v":"Finished Cup"},
          {"v":"Org2"},
          {"v":""},
          {"v":"Cebu"},
          {"v":""},
          {"v":""}]}
]}}"#;

#[tokio::test]
async fn keeps_only_the_open_upcoming_row() {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = CannedFeed { body: framed(TWO_ROW_PAYLOAD) };
    let schedule = load_schedule_from(&source).await.unwrap();

    assert_eq!(schedule.len(), 1);
    let kept = &schedule.tournaments()[0];
    assert_eq!(kept.organizer, "Org1");
    assert_eq!(kept.province, "Metro");
    assert_eq!(kept.day, "Tuesday");
    assert_eq!(kept.time, "2:30 PM");
    assert_eq!(kept.date_key, "2025-10-28T00:00:00");
}

#[tokio::test]
async fn projection_and_options_over_a_loaded_feed() {
    let _ = env_logger::builder().is_test(true).try_init();

    let payload = r#"{"table":{"rows":[
        {"c":[null,null,{"v":"Date(2025,10,2)"},null,null,{"v":"B"},{"v":"OrgB"},null,{"v":"Cebu"},null,null]},
        {"c":[null,null,{"v":"Date(2025,9,28)"},null,null,{"v":"A"},{"v":"OrgA"},null,{"v":"Metro"},null,null]},
        {"c":[null,null,{"v":"Date(2025,9,28)"},null,null,{"v":"C"},{"v":"OrgC"},null,{"v":"Metro"},null,null]}
    ]}}"#;
    let source = CannedFeed { body: framed(payload) };
    let schedule = load_schedule_from(&source).await.unwrap();

    // Sorted ascending by date, feed order preserved on the tie
    let names: Vec<&str> = schedule.tournaments().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "C", "B"]);

    // No filter: the whole working set, unchanged in order
    let all = schedule.project(&Filter::default());
    assert_eq!(all.len(), 3);
    assert_eq!(schedule::summary(all.len(), schedule.len()), "Showing all 3 tournaments");

    // Province filter: exact matches only, count preserved
    let filter = Filter { province: Some("Metro".to_string()), date_key: None };
    let metro = schedule.project(&filter);
    assert_eq!(metro.len(), 2);
    assert!(metro.iter().all(|t| t.province == "Metro"));
    assert_eq!(schedule::summary(metro.len(), schedule.len()), "Showing 2 of 3 tournaments");

    // Option lists for the dropdowns
    assert_eq!(schedule.provinces(), ["Cebu", "Metro"]);
    let dates = schedule.date_options();
    assert_eq!(dates.len(), 2);
    assert_eq!(dates[0].key, "2025-10-28T00:00:00");
    assert_eq!(dates[1].key, "2025-11-02T00:00:00");

    // Date filter through an option key
    let filter = Filter { province: None, date_key: Some(dates[1].key.clone()) };
    let on_date = schedule.project(&filter);
    assert_eq!(on_date.len(), 1);
    assert_eq!(on_date[0].name, "B");
    assert_eq!(schedule::summary(on_date.len(), schedule.len()), "Showing 1 of 3 tournament");
}

#[tokio::test]
async fn a_malformed_body_is_a_single_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = CannedFeed { body: "nope".to_string() };
    assert!(load_schedule_from(&source).await.is_err());

    let source = CannedFeed { body: framed("this is not json") };
    assert!(load_schedule_from(&source).await.is_err());
}

#[tokio::test]
async fn a_malformed_row_degrades_instead_of_aborting() {
    let _ = env_logger::builder().is_test(true).try_init();

    // First row has a broken date, second is fine: ingestion keeps going
    let payload = r#"{"table":{"rows":[
        {"c":[null,null,{"v":"garbage"},null,null,{"v":"X"},{"v":"OrgX"},null,null,null,null]},
        {"c":[null,null,{"v":"Date(2025,9,28)"},null,null,{"v":"Y"},{"v":"OrgY"},null,null,null,null]}
    ]}}"#;
    let source = CannedFeed { body: framed(payload) };
    let schedule = load_schedule_from(&source).await.unwrap();

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.tournaments()[0].name, "Y");
}
