use amortization_engine::core::dates::advance;
use amortization_engine::core::request::LoanRequest;
use amortization_engine::core::units::Duration;
use amortization_engine::schedule::dispatch::compute_amortization_schedule;
use chrono::NaiveDate;
use proptest::prelude::*;

/// Common payment frequencies (all divide twelve).
fn arb_frequency() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![1u32, 2, 4, 12])
}

/// A principal between 100 and 5,000,000.
fn arb_principal() -> impl Strategy<Value = f64> {
    (100u32..5_000_000u32).prop_map(f64::from)
}

/// A nominal rate between 0.25% and 25%.
fn arb_rate() -> impl Strategy<Value = f64> {
    (1u32..100u32).prop_map(|q| f64::from(q) * 0.25)
}

/// A start date in 2020–2030, any day of month.
fn arb_start() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .or_else(|| NaiveDate::from_ymd_opt(y, m, 28))
            .unwrap()
    })
}

/// A loan whose duration (in years) comfortably covers grace and dead phases.
fn arb_request(tag: &'static str) -> impl Strategy<Value = LoanRequest> {
    (
        arb_principal(),
        arb_rate(),
        arb_frequency(),
        2u32..30,
        0u32..12,
        0u32..2,
        arb_start(),
    )
        .prop_map(move |(principal, rate, ppy, years, grace_months, dead_semesters, start)| {
            // A semester is half an annual period; keep dead phases whole.
            let dead_semesters = if ppy % 2 == 0 { dead_semesters } else { 0 };
            LoanRequest::new(principal, rate, ppy, Duration::years(f64::from(years)), tag, start)
                .with_grace_period(Duration::months(f64::from(grace_months)))
                .with_dead_period_semesters(f64::from(dead_semesters))
        })
}

fn arb_amortizing_request() -> impl Strategy<Value = LoanRequest> {
    prop_oneof![arb_request("french"), arb_request("german")]
}

proptest! {
    // ===================================================================
    // PROPERTY 1: French and German schedules retire the principal.
    //
    // Principal portions across the regular phase add up to the original
    // principal and the final reported balance is exactly zero.
    // ===================================================================
    #[test]
    fn amortizing_schedules_conserve_principal(request in arb_amortizing_request()) {
        let rows = compute_amortization_schedule(&request).unwrap();
        let repaid: f64 = rows.iter().map(|r| r.principal).sum();
        let tolerance = request.principal() * 1e-9;
        prop_assert!(
            (repaid - request.principal()).abs() <= tolerance,
            "repaid {} of {}",
            repaid,
            request.principal()
        );
        prop_assert_eq!(rows.last().unwrap().remaining, 0.0);
    }

    // ===================================================================
    // PROPERTY 2: American schedules repay principal only at the end.
    // ===================================================================
    #[test]
    fn bullet_repays_only_at_maturity(request in arb_request("american")) {
        let rows = compute_amortization_schedule(&request).unwrap();
        let (last, earlier) = rows.split_last().unwrap();
        for row in earlier {
            prop_assert_eq!(row.principal, 0.0);
            prop_assert_eq!(row.remaining, request.principal());
        }
        prop_assert_eq!(last.principal, request.principal());
        prop_assert_eq!(last.remaining, 0.0);
    }

    // ===================================================================
    // PROPERTY 3: Dead rows are empty; grace rows pay interest only.
    // ===================================================================
    #[test]
    fn dead_and_grace_rows(request in arb_amortizing_request()) {
        let rows = compute_amortization_schedule(&request).unwrap();
        let ppy = request.payments_per_year();
        let dead = (request.dead_period_semesters() * f64::from(ppy) / 2.0) as usize;
        let grace = request.grace_period().in_periods(ppy) as usize;
        let rate = request.nominal_annual_rate_percent() / 100.0 / f64::from(ppy);

        for row in &rows[..dead] {
            prop_assert_eq!(row.payment, 0.0);
            prop_assert_eq!(row.interest, 0.0);
            prop_assert_eq!(row.principal, 0.0);
            prop_assert_eq!(row.remaining, request.principal());
        }
        for row in &rows[dead..dead + grace] {
            prop_assert_eq!(row.principal, 0.0);
            prop_assert_eq!(row.interest, request.principal() * rate);
            prop_assert_eq!(row.payment, row.interest);
        }
    }

    // ===================================================================
    // PROPERTY 4: payment = interest + principal outside dead phases.
    // ===================================================================
    #[test]
    fn payment_splits_exactly(request in arb_amortizing_request()) {
        let rows = compute_amortization_schedule(&request).unwrap();
        for row in &rows {
            let parts = row.interest + row.principal;
            prop_assert!((row.payment - parts).abs() <= 1e-9 * row.payment.abs().max(1.0));
        }
    }

    // ===================================================================
    // PROPERTY 5: Dates advance one payment interval per row.
    // ===================================================================
    #[test]
    fn dates_follow_the_advancer(request in arb_amortizing_request()) {
        let rows = compute_amortization_schedule(&request).unwrap();
        let ppy = request.payments_per_year();
        prop_assert_eq!(rows[0].payment_date, advance(request.start_date(), ppy).unwrap());
        for pair in rows.windows(2) {
            prop_assert_eq!(pair[1].payment_date, advance(pair[0].payment_date, ppy).unwrap());
            prop_assert!(pair[1].payment_date > pair[0].payment_date);
            prop_assert_eq!(pair[1].period, pair[0].period + 1);
        }
    }

    // ===================================================================
    // PROPERTY 6: Unknown convention tags always fail.
    // ===================================================================
    #[test]
    fn unknown_tags_fail(tag in "[a-z]{1,10}") {
        prop_assume!(!["french", "german", "american", "single"].contains(&tag.as_str()));
        let request = LoanRequest::new(
            1000.0,
            5.0,
            12,
            Duration::years(1.0),
            tag.clone(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let err = compute_amortization_schedule(&request).unwrap_err();
        prop_assert!(err.to_string().contains(&tag));
    }

    // ===================================================================
    // PROPERTY 7: Computation is deterministic.
    // ===================================================================
    #[test]
    fn schedules_are_deterministic(request in arb_amortizing_request()) {
        let first = compute_amortization_schedule(&request).unwrap();
        let second = compute_amortization_schedule(&request).unwrap();
        prop_assert_eq!(first, second);
    }
}
