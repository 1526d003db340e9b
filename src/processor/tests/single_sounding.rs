//! Single sounding download tests

use super::{BUCHAREST_HEADING, BUCHAREST_ROWS, MockFetcher, sounding_page};
use crate::config::FetchConfig;
use crate::models::Separator;
use crate::processor::SoundingDownloader;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use tempfile::TempDir;

fn launch(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_fetch_sounding_writes_table() {
    let temp_dir = TempDir::new().unwrap();
    let fetcher = MockFetcher::new()
        .with_page("0200", sounding_page(BUCHAREST_HEADING, BUCHAREST_ROWS));
    let config = FetchConfig::default().with_output_dir(Some(temp_dir.path().to_path_buf()));

    let downloader = SoundingDownloader::new(fetcher, config);
    let outcome = downloader.fetch_sounding("15420", launch(2, 0)).await.unwrap();

    assert_eq!(outcome.station_name, "Bucuresti_Inmh-Banesa");
    assert_eq!(outcome.path, temp_dir.path().join("20251102_0000_15420.txt"));
    assert_eq!(outcome.profile.pressure_hpa, vec![1000.0, 925.0, 700.0]);
    assert_eq!(outcome.profile.height_m, vec![100.0, 780.0, 3010.0]);
    assert_eq!(outcome.profile.temperature_c, vec![15.2, 10.4, -2.5]);

    let written = fs::read_to_string(&outcome.path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4 + BUCHAREST_ROWS.len());
    assert_eq!(lines[1], "PRES,HGHT,TEMP,DWPT,RELH,MIXR,DRCT,SKNT,THTA,THTE,THTV");
    assert_eq!(lines[4], "1000.0,100,15.2,10.1,70,8.5,270,10,290.0,295.0,288.0");
    assert_eq!(lines[6], "850.0,/////,12.0");
}

#[tokio::test]
async fn test_request_url_uses_config() {
    let config = FetchConfig::default().with_region("naconf");
    let downloader = SoundingDownloader::new(MockFetcher::new(), config);

    let url = downloader.request_url("72520", launch(9, 12)).unwrap();
    let query = url.query().unwrap();

    assert!(query.contains("region=naconf"));
    assert!(query.contains("FROM=0912"));
    assert!(query.contains("STNM=72520"));
}

#[tokio::test]
async fn test_tab_separator_output() {
    let temp_dir = TempDir::new().unwrap();
    let fetcher = MockFetcher::new()
        .with_page("0212", sounding_page(BUCHAREST_HEADING, BUCHAREST_ROWS));
    let config = FetchConfig::default()
        .with_separator(Separator::Tab)
        .with_output_dir(Some(temp_dir.path().to_path_buf()));

    let downloader = SoundingDownloader::new(fetcher, config);
    let outcome = downloader.fetch_sounding("15420", launch(2, 12)).await.unwrap();

    let written = fs::read_to_string(&outcome.path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[2], "hPa\tm\tC\tC\t%\tg/kg\tdeg\tknot\tK\tK\tK");
    assert_eq!(lines[5].split('\t').count(), 11);
    assert!(outcome.path.ends_with("20251102_1200_15420.txt"));
}

#[tokio::test]
async fn test_missing_heading_falls_back_to_station_id() {
    let temp_dir = TempDir::new().unwrap();
    let page = sounding_page("", BUCHAREST_ROWS).replace("<H2></H2>", "");
    let fetcher = MockFetcher::new().with_page("0200", page);
    let config = FetchConfig::default().with_output_dir(Some(temp_dir.path().to_path_buf()));

    let downloader = SoundingDownloader::new(fetcher, config);
    let outcome = downloader.fetch_sounding("15420", launch(2, 0)).await.unwrap();

    assert_eq!(outcome.station_name, "15420");
    assert_eq!(outcome.profile.len(), 3);
}
