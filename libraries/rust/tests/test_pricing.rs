use financialops::config::FeeSchedule;
use financialops::prelude::Price;
use financialops::pricing::{checked_discounted_price, checked_total_with_fees};
use financialops::{discounted_price, total_with_fees, Error};
use rust_decimal::Decimal;

#[test]
fn test_checkout_total() -> anyhow::Result<()> {
    let price = checked_total_with_fees(100.0, 10.0, 2.0)?;

    assert_eq!(price, Price::from(Decimal::new(11200, 2)));
    assert_eq!(price.to_f64(), total_with_fees(100.0, 10.0, 2.0));

    Ok(())
}

#[test]
fn test_discount_boundaries() -> anyhow::Result<()> {
    assert_eq!(discounted_price(50.0, 0.0), 50.0);
    assert_eq!(discounted_price(50.0, -5.0), 50.0);
    assert_eq!(discounted_price(50.0, 100.0), 0.0);
    assert_eq!(discounted_price(50.0, 150.0), 0.0);

    let price = checked_discounted_price(200.0, 25.0)?;
    assert_eq!(price.amount(), Decimal::new(150, 0));

    Ok(())
}

#[test]
fn test_fee_schedule_from_json() -> anyhow::Result<()> {
    let schedule = FeeSchedule::from_json(
        r#"{
            "tax_rate_percent": 10.0,
            "processing_fee_percent": 2.0
        }"#,
    )?;

    assert_eq!(schedule.total(100.0), 112.0);
    assert_eq!(schedule.checked_total(100.0)?.amount(), Decimal::new(112, 0));

    Ok(())
}

#[test]
fn test_non_finite_results_are_errors() {
    let err = checked_total_with_fees(f64::NAN, 10.0, 0.0).unwrap_err();

    assert!(matches!(err, Error::NonFinite(_)));
    assert_eq!(err.to_string(), "Non-finite price: NaN");
}
