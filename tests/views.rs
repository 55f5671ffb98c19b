// tests/views.rs
mod common;

use bulletin_scrape::chart::Y_LABEL;
use bulletin_scrape::progress::NullProgress;
use bulletin_scrape::{District, Error};

use common::*;

#[test]
fn table_holds_only_cached_dates_in_window() {
    let (archive, _tmp) = archive(FakeSource::new(&["01-07-2020", "02-07-2020"]));
    let all = archive.get_data(None, None, &mut NullProgress).unwrap();
    assert_eq!(all.len(), 2);

    let one = archive.get_data(Some("01-07-2020"), Some("01-07-2020"), &mut NullProgress).unwrap();
    assert_eq!(one.dates(), vec![d("01-07-2020")]);
    assert_eq!(one.records()[0].count(District::EastGodavari), 12);
}

#[test]
fn inverted_window_yields_an_empty_table() {
    let (archive, _tmp) = archive(FakeSource::new(&["01-07-2020", "05-07-2020"]));
    let table = archive.get_data(Some("05-07-2020"), Some("01-07-2020"), &mut NullProgress).unwrap();
    assert!(table.is_empty());
    assert_eq!(archive.source().fetches.get(), 0);
}

#[test]
fn state_trend_plots_daily_totals() {
    let (archive, _tmp) = archive(FakeSource::new(&["01-07-2020", "02-07-2020"]));
    let mut rec = Recorder::default();
    archive.state_trend(None, None, &mut rec, &mut NullProgress).unwrap();

    let chart = &rec.charts[0];
    assert_eq!(chart.title, "State corona trend");
    assert_eq!(chart.y_label, Y_LABEL);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].values, vec![57, 57]);
}

#[test]
fn district_trend_plots_every_district() {
    let (archive, _tmp) = archive(FakeSource::new(&["01-07-2020", "02-07-2020", "03-07-2020"]));
    let mut rec = Recorder::default();
    archive
        .districts_trend(Some("02-07-2020"), None, &mut rec, &mut NullProgress)
        .unwrap();

    let chart = &rec.charts[0];
    assert_eq!(chart.title, "District wise trend");
    assert_eq!(chart.series.len(), 13);
    assert_eq!(chart.dates, vec![d("02-07-2020"), d("03-07-2020")]);
    assert_eq!(chart.series[0].name, "Anantapur");
    assert_eq!(chart.series[0].values, vec![5, 5]);
}

#[test]
fn trend_does_not_render_after_a_failure() {
    let (archive, _tmp) = archive(FakeSource::new(&["01-07-2020"]).broken("01-07-2020"));
    let mut rec = Recorder::default();
    assert!(archive.state_trend(None, None, &mut rec, &mut NullProgress).is_err());
    assert!(rec.charts.is_empty());
}

#[test]
fn summary_is_not_available_yet() {
    let (archive, _tmp) = archive(FakeSource::new(&[]));
    assert!(matches!(
        archive.state_summary(None, None),
        Err(Error::NotImplemented(_))
    ));
    assert!(matches!(
        archive.state_summary(Some("01-01-2019"), None),
        Err(Error::InvalidRange { .. })
    ));
}
