//! End-to-end scenarios driven entirely through the public engine entry
//! point, each covering one worked example of the monthly wage
//! computation.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use guide_wage_engine::engine::compute_monthly_totals;
use guide_wage_engine::models::{
    ApartmentRecord, ApartmentTable, ApartmentType, HousingRateTable, MinimumWageRate,
    MinimumWageTable, PersonId, PersonRecord, PersonStatus, PersonTable, ReferenceSnapshot,
    Report, ReportId, SabbathCache, SabbathWeek, SegmentTemplateId, SegmentTemplateType,
    ShiftKind, ShiftKindId, ShiftKindTable, ShiftTemplateSegment, StandbyRate, StandbyRateTable,
};
use guide_wage_engine::models::ids::ApartmentId;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn minimum_wage() -> MinimumWageTable {
    MinimumWageTable::new(vec![MinimumWageRate {
        effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        hourly: dec("32.30"),
    }])
}

fn base_person() -> PersonRecord {
    PersonRecord {
        id: PersonId(1),
        live_status: PersonStatus {
            is_married: true,
            employer_id: 1,
            employee_type: "monthly".to_string(),
        },
        status_history: vec![],
    }
}

fn base_apartment() -> ApartmentRecord {
    ApartmentRecord {
        id: ApartmentId(1),
        live_type: ApartmentType::Regular,
        type_history: vec![],
    }
}

fn full_day_work_template(kind_id: i64) -> ShiftKind {
    ShiftKind {
        id: ShiftKindId(kind_id),
        template: vec![ShiftTemplateSegment {
            id: SegmentTemplateId(1),
            segment_type: SegmentTemplateType::Work,
            start_minute: 0,
            end_minute: 2880,
            order_index: 0,
        }],
    }
}

fn bare_report(id: i64, date: NaiveDate, shift_kind_id: i64, start_minute: i64, end_minute: i64) -> Report {
    Report {
        id: ReportId(id),
        person_id: PersonId(1),
        apartment_id: ApartmentId(1),
        date,
        start_minute,
        end_minute,
        shift_kind_id: ShiftKindId(shift_kind_id),
        is_vacation: false,
        is_sick: false,
        travel_amount: Decimal::ZERO,
    }
}

/// S1: a single weekday shift is paid entirely at 100%.
#[test]
fn test_s1_simple_weekday() {
    let tuesday = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let snapshot = ReferenceSnapshot {
        people: PersonTable::new(vec![base_person()]),
        apartments: ApartmentTable::new(vec![base_apartment()]),
        reports: vec![bare_report(1, tuesday, 105, 480, 960)],
        shift_kinds: ShiftKindTable::new(vec![full_day_work_template(105)]),
        standby_rates: StandbyRateTable::new(vec![]),
        housing_rates: HousingRateTable::default(),
        sabbath: SabbathCache::default(),
        minimum_wage: minimum_wage(),
        month_locks: vec![],
    };

    let outcome = compute_monthly_totals(&snapshot, PersonId(1), 2025, 6).unwrap();

    assert_eq!(outcome.totals.calc100, 480);
    assert_eq!(outcome.totals.calc125, 0);
    assert_eq!(outcome.totals.calc150, 0);
    assert_eq!(outcome.totals.standby_payment, Decimal::ZERO);
    assert!(outcome.warnings.is_empty());
}

/// S2: two reports on the same day, joined by a break under the 60-minute
/// threshold, tier into a single 570-minute chain.
#[test]
fn test_s2_overtime_with_sub_threshold_break() {
    let tuesday = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let snapshot = ReferenceSnapshot {
        people: PersonTable::new(vec![base_person()]),
        apartments: ApartmentTable::new(vec![base_apartment()]),
        reports: vec![
            bare_report(1, tuesday, 105, 480, 990),
            bare_report(2, tuesday, 105, 1020, 1080),
        ],
        shift_kinds: ShiftKindTable::new(vec![full_day_work_template(105)]),
        standby_rates: StandbyRateTable::new(vec![]),
        housing_rates: HousingRateTable::default(),
        sabbath: SabbathCache::default(),
        minimum_wage: minimum_wage(),
        month_locks: vec![],
    };

    let outcome = compute_monthly_totals(&snapshot, PersonId(1), 2025, 6).unwrap();

    assert_eq!(outcome.totals.calc100, 480);
    assert_eq!(outcome.totals.calc125, 90);
}

/// S3: the dynamically decomposed night shift splits into work/standby/work,
/// with the mid-shift standby too far from work to be cancelled.
#[test]
fn test_s3_night_shift_dynamic_segments() {
    let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
    let snapshot = ReferenceSnapshot {
        people: PersonTable::new(vec![base_person()]),
        apartments: ApartmentTable::new(vec![base_apartment()]),
        reports: vec![bare_report(1, sunday, 107, 1320, 480)],
        shift_kinds: ShiftKindTable::new(vec![ShiftKind {
            id: ShiftKindId(107),
            template: vec![],
        }]),
        standby_rates: StandbyRateTable::new(vec![]),
        housing_rates: HousingRateTable::default(),
        sabbath: SabbathCache::default(),
        minimum_wage: minimum_wage(),
        month_locks: vec![],
    };

    let outcome = compute_monthly_totals(&snapshot, PersonId(1), 2025, 6).unwrap();

    assert_eq!(outcome.totals.calc100, 210);
    assert_eq!(outcome.totals.standby_minutes, 390);
    assert_eq!(outcome.totals.standby_payment, dec("455.00"));
}

/// S4: a Friday-to-Saturday chain crossing Sabbath entry splits into
/// weekday and Sabbath tier bands that sum back to the chain length.
#[test]
fn test_s4_sabbath_split() {
    let friday = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
    let snapshot = ReferenceSnapshot {
        people: PersonTable::new(vec![base_person()]),
        apartments: ApartmentTable::new(vec![base_apartment()]),
        reports: vec![bare_report(1, friday, 105, 840, 120)],
        shift_kinds: ShiftKindTable::new(vec![full_day_work_template(105)]),
        standby_rates: StandbyRateTable::new(vec![]),
        housing_rates: HousingRateTable::default(),
        sabbath: SabbathCache::new(vec![SabbathWeek {
            entry_date: friday,
            entry_minute: 1110,
            exit_date: saturday,
            exit_minute: 1320,
        }]),
        minimum_wage: minimum_wage(),
        month_locks: vec![],
    };

    let outcome = compute_monthly_totals(&snapshot, PersonId(1), 2025, 6).unwrap();

    assert_eq!(outcome.totals.calc100, 270);
    assert_eq!(outcome.totals.calc150_shabbat, 210);
    assert_eq!(outcome.totals.calc175, 120);
    assert_eq!(outcome.totals.calc200, 120);
    assert_eq!(outcome.totals.calc150, 210);
    assert_eq!(outcome.totals.calc150_shabbat_100, 140);
    assert_eq!(outcome.totals.calc150_shabbat_50, 70);
    assert_eq!(
        outcome.totals.calc100 + outcome.totals.calc150_shabbat + outcome.totals.calc175 + outcome.totals.calc200,
        720
    );
}

/// S5: a standby segment fully overlapped by work is cancelled, with the
/// deduction capped and the excess paid out as a residual.
#[test]
fn test_s5_standby_cancelled_by_overlap() {
    let tuesday = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let snapshot = ReferenceSnapshot {
        people: PersonTable::new(vec![base_person()]),
        apartments: ApartmentTable::new(vec![base_apartment()]),
        reports: vec![bare_report(1, tuesday, 105, 540, 600)],
        shift_kinds: ShiftKindTable::new(vec![ShiftKind {
            id: ShiftKindId(105),
            template: vec![
                ShiftTemplateSegment {
                    id: SegmentTemplateId(1),
                    segment_type: SegmentTemplateType::Work,
                    start_minute: 540,
                    end_minute: 600,
                    order_index: 0,
                },
                ShiftTemplateSegment {
                    id: SegmentTemplateId(2),
                    segment_type: SegmentTemplateType::Standby,
                    start_minute: 540,
                    end_minute: 600,
                    order_index: 1,
                },
            ],
        }]),
        standby_rates: StandbyRateTable::new(vec![StandbyRate {
            id: 1,
            segment_id: SegmentTemplateId(2),
            apartment_type: None,
            is_married: None,
            priority: 0,
            live_rate: dec("80.00"),
            rate_history: vec![],
        }]),
        housing_rates: HousingRateTable::default(),
        sabbath: SabbathCache::default(),
        minimum_wage: minimum_wage(),
        month_locks: vec![],
    };

    let outcome = compute_monthly_totals(&snapshot, PersonId(1), 2025, 6).unwrap();

    assert_eq!(outcome.totals.calc100, 60);
    assert_eq!(outcome.totals.standby_minutes, 0);
    assert_eq!(outcome.totals.standby_payment, dec("10.00"));
    assert!(outcome.warnings.iter().any(|w| w.code == "cancelled_standby_deduction"));
}

/// S6: a person's marital-status history resolves by "valid-until" — a
/// month before the history key uses the historical value, the key's own
/// month and onward use the live value — which in turn changes which
/// standby rate row matches.
#[test]
fn test_s6_history_valid_until_changes_standby_rate() {
    let tuesday = NaiveDate::from_ymd_opt(2025, 2, 11).unwrap();
    let march_tuesday = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();

    let mut person = base_person();
    person.status_history = vec![guide_wage_engine::history::HistoryRecord {
        year: 2025,
        month: 3,
        value: PersonStatus {
            is_married: false,
            employer_id: 1,
            employee_type: "monthly".to_string(),
        },
    }];

    let shift_kind = ShiftKind {
        id: ShiftKindId(105),
        template: vec![
            ShiftTemplateSegment {
                id: SegmentTemplateId(1),
                segment_type: SegmentTemplateType::Work,
                start_minute: 540,
                end_minute: 560,
                order_index: 0,
            },
            ShiftTemplateSegment {
                id: SegmentTemplateId(2),
                segment_type: SegmentTemplateType::Standby,
                start_minute: 540,
                end_minute: 600,
                order_index: 1,
            },
        ],
    };

    let standby_rates = StandbyRateTable::new(vec![
        StandbyRate {
            id: 1,
            segment_id: SegmentTemplateId(2),
            apartment_type: None,
            is_married: None,
            priority: 0,
            live_rate: dec("70.00"),
            rate_history: vec![],
        },
        StandbyRate {
            id: 2,
            segment_id: SegmentTemplateId(2),
            apartment_type: None,
            is_married: Some(true),
            priority: 10,
            live_rate: dec("90.00"),
            rate_history: vec![],
        },
        StandbyRate {
            id: 3,
            segment_id: SegmentTemplateId(2),
            apartment_type: None,
            is_married: Some(false),
            priority: 10,
            live_rate: dec("60.00"),
            rate_history: vec![],
        },
    ]);

    let make_snapshot = |report_date: NaiveDate| ReferenceSnapshot {
        people: PersonTable::new(vec![person.clone()]),
        apartments: ApartmentTable::new(vec![base_apartment()]),
        reports: vec![bare_report(1, report_date, 105, 480, 600)],
        shift_kinds: ShiftKindTable::new(vec![shift_kind.clone()]),
        standby_rates: standby_rates.clone(),
        housing_rates: HousingRateTable::default(),
        sabbath: SabbathCache::default(),
        minimum_wage: minimum_wage(),
        month_locks: vec![],
    };

    let february_outcome =
        compute_monthly_totals(&make_snapshot(tuesday), PersonId(1), 2025, 2).unwrap();
    assert_eq!(february_outcome.totals.standby_payment, dec("60.00"));

    let march_outcome =
        compute_monthly_totals(&make_snapshot(march_tuesday), PersonId(1), 2025, 3).unwrap();
    assert_eq!(march_outcome.totals.standby_payment, dec("90.00"));
}
