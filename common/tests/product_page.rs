use common::bus::{BusEvent, EventKind};
use common::config::CatalogConfig;
use common::error::FieldError;
use common::model::{Product, Rating, Review, Shipping, Variant, VariantId};
use common::state::{ProductPage, Tab};

fn socks(premium: bool) -> CatalogConfig {
    let product = Product::new(
        "Socks",
        "Vue Mastery",
        vec!["80% cotton".to_string(), "20% polyester".to_string()],
        vec![
            Variant {
                id: VariantId(2234),
                color: "green".to_string(),
                image: "assets/vmSocks-green-onWhite.jpg".to_string(),
                quantity: 10,
            },
            Variant {
                id: VariantId(2235),
                color: "blue".to_string(),
                image: "assets/vmSocks-blue-onWhite.jpg".to_string(),
                quantity: 0,
            },
        ],
    )
    .unwrap();
    CatalogConfig { premium, product }
}

#[test]
fn add_to_cart_then_hover_out_of_stock() {
    let mut page = ProductPage::new(socks(true));
    assert!(page.catalog().in_stock());
    assert!(page.add_to_cart_enabled());

    page.add_to_cart();
    assert_eq!(page.cart().entries(), &[VariantId(2234)]);
    assert!(page.catalog().cart_has_contents());

    page.hover(1).unwrap();
    assert!(!page.catalog().in_stock());
    assert!(!page.add_to_cart_enabled());
    assert_eq!(page.catalog().image(), "assets/vmSocks-blue-onWhite.jpg");
}

#[test]
fn forced_add_while_out_of_stock_appends() {
    let mut page = ProductPage::new(socks(false));
    page.hover(1).unwrap();
    page.add_to_cart();
    assert_eq!(page.cart().entries(), &[VariantId(2235)]);
    assert!(page.catalog().cart_has_contents());
}

#[test]
fn clear_cart_resets_cart_and_flag() {
    let mut page = ProductPage::new(socks(true));
    page.add_to_cart();
    page.add_to_cart();
    assert_eq!(page.cart().len(), 2);

    page.clear_cart();
    assert!(page.cart().is_empty());
    assert!(!page.catalog().cart_has_contents());
}

#[test]
fn shipping_follows_membership_only() {
    let mut premium = ProductPage::new(socks(true));
    let mut regular = ProductPage::new(socks(false));
    for index in 0..2 {
        premium.hover(index).unwrap();
        regular.hover(index).unwrap();
        assert_eq!(premium.shipping(), Shipping::Free);
        assert_eq!(regular.shipping(), Shipping::Flat(2.99));
    }
}

#[test]
fn successful_review_reaches_catalog_and_tabs() {
    let mut page = ProductPage::new(socks(true));
    page.select_tab(Tab::MakeReview);

    let form = page.form_mut();
    form.set_name("Amy");
    form.set_body("Great socks");
    form.set_rating_input("5").unwrap();

    let review = page.submit_review().expect("review published");
    assert_eq!(page.reviews().as_slice(), &[review.clone()]);
    assert_eq!(page.catalog().reviews().as_slice(), &[review]);
    assert!(page.form().errors().is_empty());
    assert_eq!(page.form().name(), "");
    assert_eq!(page.form().rating(), None);
    assert_eq!(page.active_tab(), Tab::Reviews);
}

#[test]
fn missing_name_publishes_nothing() {
    let mut page = ProductPage::new(socks(true));
    page.select_tab(Tab::MakeReview);

    let form = page.form_mut();
    form.set_name("");
    form.set_body("ok");
    form.set_rating_input("3").unwrap();

    assert!(page.submit_review().is_none());
    assert!(page.reviews().is_empty());
    assert_eq!(page.form().errors(), &[FieldError::NameRequired]);
    assert_eq!(page.active_tab(), Tab::MakeReview);
}

#[test]
fn drafts_survive_tab_switches() {
    let mut page = ProductPage::new(socks(true));
    page.select_tab(Tab::MakeReview);
    page.form_mut().set_name("Bo");
    page.select_tab(Tab::Reviews);
    page.select_tab(Tab::MakeReview);
    assert_eq!(page.form().name(), "Bo");
}

#[test]
fn reviews_accumulate_in_submission_order() {
    let mut page = ProductPage::new(socks(true));
    for (name, rating) in [("Amy", "5"), ("Bo", "2"), ("Cy", "4")] {
        let form = page.form_mut();
        form.set_name(name);
        form.set_body("text");
        form.set_rating_input(rating).unwrap();
        page.submit_review().expect("review published");
    }

    let names: Vec<String> = page
        .reviews()
        .iter()
        .map(|review| review.name().to_string())
        .collect();
    assert_eq!(names, vec!["Amy", "Bo", "Cy"]);
}

#[test]
fn catalog_and_tabs_listen_on_the_page_bus() {
    let mut page = ProductPage::new(socks(false));
    assert!(!page.premium());
    assert_eq!(page.bus().subscriber_count(EventKind::ReviewSubmitted), 2);

    page.select_tab(Tab::MakeReview);
    let review = Review::new("Dee", "Comfy", Rating::try_from(4).unwrap()).unwrap();
    page.bus().publish(BusEvent::ReviewSubmitted(review.clone()));

    assert_eq!(page.reviews().as_slice(), &[review]);
    assert_eq!(page.active_tab(), Tab::Reviews);
}

#[test]
fn premium_flag_comes_from_config() {
    assert!(ProductPage::new(socks(true)).premium());
}
