use serde_json::json;

/// Render a schedule document from (name, date, isOffDay) triples.
pub fn schedule_json(year: i32, days: &[(&str, &str, bool)]) -> String {
    let days: Vec<_> = days
        .iter()
        .map(|(name, date, is_off_day)| json!({"name": name, "date": date, "isOffDay": is_off_day}))
        .collect();
    json!({
        "$schema": "https://raw.githubusercontent.com/NateScarlet/holiday-cn/master/schema.json",
        "year": year,
        "papers": ["http://www.gov.cn/zhengce/content/2023-10/25/content_6911527.htm"],
        "days": days,
    })
    .to_string()
}

/// The 2024 schedule as published.
pub fn schedule_2024() -> String {
    let mut days = vec![
        ("元旦", "2024-01-01".to_string(), true),
        ("春节", "2024-02-04".to_string(), false),
    ];
    for day in 10..=17 {
        days.push(("春节", format!("2024-02-{}", day), true));
    }
    days.push(("春节", "2024-02-18".to_string(), false));
    for day in 4..=6 {
        days.push(("清明节", format!("2024-04-0{}", day), true));
    }
    days.push(("清明节", "2024-04-07".to_string(), false));
    days.push(("劳动节", "2024-04-28".to_string(), false));
    for day in 1..=5 {
        days.push(("劳动节", format!("2024-05-0{}", day), true));
    }
    days.push(("劳动节", "2024-05-11".to_string(), false));
    days.push(("端午节", "2024-06-10".to_string(), true));
    days.push(("中秋节", "2024-09-14".to_string(), false));
    for day in 15..=17 {
        days.push(("中秋节", format!("2024-09-{}", day), true));
    }
    days.push(("国庆节", "2024-09-29".to_string(), false));
    for day in 1..=7 {
        days.push(("国庆节", format!("2024-10-0{}", day), true));
    }
    days.push(("国庆节", "2024-10-12".to_string(), false));

    let borrowed: Vec<(&str, &str, bool)> = days
        .iter()
        .map(|(name, date, off)| (*name, date.as_str(), *off))
        .collect();
    schedule_json(2024, &borrowed)
}

/// Number of records in [`schedule_2024`].
pub const RECORDS_2024: usize = 36;
