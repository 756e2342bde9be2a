//! Integration stage: payments, booking and contact wiring.
//!
//! Depends on the brief alone, never on the architecture.

use brandforge_shared::{
    BillingInterval, BookingIntegration, BookingProvider, Brief, CheckoutMode, ContactIntegration,
    ContactMethod, IntegrationBlueprint, Product, StripeIntegration,
};
use tracing::{debug, instrument};

use crate::text::{encode_uri_component, slugify, title_case};

/// Price of the first product, in whole currency units.
pub const BASE_PRICE: u32 = 49;

/// Added to the price for each following product.
pub const PRICE_STEP: u32 = 20;

/// At most this many features become products.
pub const MAX_PRODUCTS: usize = 3;

/// ISO 4217 code for every product.
pub const CURRENCY: &str = "USD";

/// Wire the integrations requested by a brief.
#[instrument(skip_all, fields(brand = %brief.brand_name))]
pub fn integration(brief: &Brief) -> IntegrationBlueprint {
    let stripe = brief.enable_payments.then(|| stripe_for(brief));
    let booking = brief.enable_booking.then(|| booking_for(&brief.brand_name));

    debug!(
        payments = stripe.is_some(),
        booking = booking.is_some(),
        "integrations wired"
    );

    IntegrationBlueprint {
        stripe,
        booking,
        contact: contact_for(&brief.brand_name),
    }
}

fn stripe_for(brief: &Brief) -> StripeIntegration {
    let subscriptions = brief.wants_subscriptions();
    let interval = if subscriptions {
        BillingInterval::Month
    } else {
        BillingInterval::OneTime
    };
    let brand = title_case(&brief.brand_name);

    let products = brief
        .leading_features(MAX_PRODUCTS)
        .iter()
        .zip(0u32..)
        .map(|(feature, index)| Product {
            name: format!("{brand} {feature}"),
            price: BASE_PRICE + index * PRICE_STEP,
            interval,
            currency: CURRENCY.to_string(),
        })
        .collect();

    StripeIntegration {
        enabled: true,
        products,
        checkout_mode: if subscriptions {
            CheckoutMode::Subscription
        } else {
            CheckoutMode::Payment
        },
    }
}

fn booking_for(brand_name: &str) -> BookingIntegration {
    BookingIntegration {
        enabled: true,
        provider: BookingProvider::Cal,
        link: format!("https://cal.com/{}/discovery", slugify(brand_name)),
    }
}

fn contact_for(brand_name: &str) -> ContactIntegration {
    ContactIntegration {
        enabled: true,
        method: ContactMethod::Form,
        endpoint: format!("/api/contact?brand={}", encode_uri_component(brand_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{lumen_brief, neutral_brief};

    #[test]
    fn payments_off_means_no_stripe() {
        let result = integration(&neutral_brief());
        assert!(result.stripe.is_none());
    }

    #[test]
    fn product_count_is_capped_at_three() {
        for n in 1..=5 {
            let mut brief = neutral_brief();
            brief.enable_payments = true;
            brief.key_features = (0..n).map(|i| format!("Feature {i}")).collect();

            let stripe = integration(&brief).stripe.expect("stripe enabled");
            assert!(stripe.enabled);
            assert_eq!(stripe.products.len(), n.min(MAX_PRODUCTS));
            for (i, product) in stripe.products.iter().enumerate() {
                assert_eq!(product.price, BASE_PRICE + i as u32 * PRICE_STEP);
                assert_eq!(product.currency, "USD");
            }
        }
    }

    #[test]
    fn product_names_and_prices() {
        let stripe = integration(&lumen_brief()).stripe.expect("stripe enabled");
        let names: Vec<_> = stripe.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Lumen AI layout composer", "Lumen SEO clustering", "Lumen Stripe checkout"]
        );
        let prices: Vec<_> = stripe.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![49, 69, 89]);
    }

    #[test]
    fn subscriptions_tag_switches_billing() {
        let stripe = integration(&lumen_brief()).stripe.expect("stripe enabled");
        assert_eq!(stripe.checkout_mode, CheckoutMode::Subscription);
        assert!(
            stripe
                .products
                .iter()
                .all(|p| p.interval == BillingInterval::Month)
        );

        let mut brief = lumen_brief();
        brief.integrations = vec!["crm".into()];
        let stripe = integration(&brief).stripe.expect("stripe enabled");
        assert_eq!(stripe.checkout_mode, CheckoutMode::Payment);
        assert!(
            stripe
                .products
                .iter()
                .all(|p| p.interval == BillingInterval::OneTime)
        );
    }

    #[test]
    fn booking_gating_and_slug() {
        assert!(integration(&lumen_brief()).booking.is_none());

        let mut brief = neutral_brief();
        brief.brand_name = "Lumen  Labs Studio".into();
        brief.enable_booking = true;
        let booking = integration(&brief).booking.expect("booking enabled");
        assert!(booking.enabled);
        assert_eq!(booking.provider, BookingProvider::Cal);
        assert_eq!(booking.link, "https://cal.com/lumen-labs-studio/discovery");
    }

    #[test]
    fn contact_is_always_present_and_encoded() {
        let mut brief = neutral_brief();
        brief.brand_name = "Black & White Co".into();
        let contact = integration(&brief).contact;
        assert!(contact.enabled);
        assert_eq!(contact.method, ContactMethod::Form);
        assert_eq!(contact.endpoint, "/api/contact?brand=Black%20%26%20White%20Co");
    }
}
