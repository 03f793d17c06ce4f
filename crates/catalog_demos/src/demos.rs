//! Live demo widgets bound to manifest `live_demo` keys.
//!
//! Every widget keeps its own local state and composes `catalog_ui` primitives; none of them
//! reach into catalog or preview state.

use catalog_contract::{LiveDemo, RenderFault};
use catalog_ui::prelude::*;
use leptos::*;

/// Every key a manifest entry may name, in registration order.
pub const DEMO_KEYS: [&str; 7] = [
    "search-field",
    "toggle-switch",
    "checkout-stepper",
    "primary-button",
    "counter-badge",
    "usage-sparkline",
    "tilt-card",
];

/// Looks up the live demo factory registered under `key`.
pub fn live_demo(key: &str) -> Option<LiveDemo> {
    let demo = match key {
        "search-field" => LiveDemo::new(|| view! { <SearchFieldDemo/> }),
        "toggle-switch" => LiveDemo::new(|| view! { <ToggleSwitchDemo/> }),
        "checkout-stepper" => LiveDemo::new(|| view! { <CheckoutStepperDemo/> }),
        "primary-button" => LiveDemo::new(|| view! { <PrimaryButtonDemo/> }),
        "counter-badge" => LiveDemo::new(|| view! { <CounterBadgeDemo/> }),
        "usage-sparkline" => LiveDemo::fallible(|| sparkline_view(&USAGE_SERIES)),
        "tilt-card" => LiveDemo::new(|| view! { <TiltCardDemo/> }),
        _ => return None,
    };
    Some(demo)
}

#[component]
fn SearchFieldDemo() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let echo = move || {
        let value = query.get();
        if value.trim().is_empty() {
            "Start typing to search".to_string()
        } else {
            format!("Searching for \"{}\"", value.trim())
        }
    };

    view! {
        <Stack gap=LayoutGap::Sm>
            <TextField
                variant=FieldVariant::Search
                placeholder="Search components"
                aria_label="Search components"
                value=query
                on_input=Callback::new(move |ev| query.set(event_target_value(&ev)))
            />
            <Text role=TextRole::Caption tone=TextTone::Secondary>{echo}</Text>
        </Stack>
    }
}

#[component]
fn ToggleSwitchDemo() -> impl IntoView {
    let enabled = create_rw_signal(false);

    view! {
        <Cluster gap=LayoutGap::Sm>
            <Switch
                aria_label="Notifications"
                checked=enabled
                on_toggle=Callback::new(move |next| enabled.set(next))
            />
            <Text>
                {move || if enabled.get() { "Notifications on" } else { "Notifications off" }}
            </Text>
        </Cluster>
    }
}

/// Steps of the checkout stepper demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Review cart contents.
    Cart,
    /// Enter a shipping address.
    Shipping,
    /// Enter payment details.
    Payment,
    /// Confirm the order.
    Review,
}

impl CheckoutStep {
    const ORDER: [Self; 4] = [Self::Cart, Self::Shipping, Self::Payment, Self::Review];

    /// One-based position, used as the progress value.
    pub fn position(self) -> u16 {
        match self {
            Self::Cart => 1,
            Self::Shipping => 2,
            Self::Payment => 3,
            Self::Review => 4,
        }
    }

    /// Step label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cart => "Cart",
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    /// Following step; the last step stays put.
    pub fn next(self) -> Self {
        Self::ORDER
            .get(usize::from(self.position()))
            .copied()
            .unwrap_or(self)
    }

    /// Preceding step; the first step stays put.
    pub fn previous(self) -> Self {
        match self.position() {
            1 => self,
            position => Self::ORDER[usize::from(position) - 2],
        }
    }

    fn total() -> u16 {
        Self::ORDER.len() as u16
    }
}

#[component]
fn CheckoutStepperDemo() -> impl IntoView {
    let step = create_rw_signal(CheckoutStep::Cart);
    let progress = Signal::derive(move || step.get().position());

    view! {
        <Stack gap=LayoutGap::Sm>
            <Text role=TextRole::Label>
                {move || {
                    let current = step.get();
                    format!(
                        "Step {} of {}: {}",
                        current.position(),
                        CheckoutStep::total(),
                        current.label(),
                    )
                }}
            </Text>
            <ProgressBar aria_label="Checkout progress" max=CheckoutStep::total() value=progress/>
            <Cluster gap=LayoutGap::Sm>
                <Button
                    variant=ButtonVariant::Ghost
                    disabled=Signal::derive(move || step.get() == CheckoutStep::Cart)
                    on_click=Callback::new(move |_| step.update(|s| *s = s.previous()))
                >
                    "Back"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || step.get() == CheckoutStep::Review)
                    on_click=Callback::new(move |_| step.update(|s| *s = s.next()))
                >
                    "Next"
                </Button>
            </Cluster>
        </Stack>
    }
}

#[component]
fn PrimaryButtonDemo() -> impl IntoView {
    let clicks = create_rw_signal(0_u32);

    view! {
        <Button
            variant=ButtonVariant::Primary
            on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
        >
            {move || match clicks.get() {
                0 => "Click me".to_string(),
                1 => "Clicked once".to_string(),
                count => format!("Clicked {count} times"),
            }}
        </Button>
    }
}

#[component]
fn CounterBadgeDemo() -> impl IntoView {
    let unread = create_rw_signal(3_u32);

    view! {
        <Cluster gap=LayoutGap::Sm>
            <Text>"Inbox"</Text>
            <Badge tone=TextTone::Accent>{move || unread.get().to_string()}</Badge>
            <Button
                size=ButtonSize::Sm
                on_click=Callback::new(move |_| unread.update(|count| *count += 1))
            >
                "New message"
            </Button>
            <Button
                size=ButtonSize::Sm
                variant=ButtonVariant::Ghost
                on_click=Callback::new(move |_| unread.set(0))
            >
                "Mark all read"
            </Button>
        </Cluster>
    }
}

const USAGE_SERIES: [f64; 8] = [3.0, 7.0, 4.0, 9.0, 6.0, 11.0, 8.0, 12.0];
const SPARKLINE_WIDTH: f64 = 160.0;
const SPARKLINE_HEIGHT: f64 = 40.0;

/// SVG `points` attribute for `series` scaled into a `width` x `height` box.
///
/// Larger values sit higher. A flat series is drawn through the vertical middle.
pub fn sparkline_points(series: &[f64], width: f64, height: f64) -> Result<String, RenderFault> {
    if series.is_empty() {
        return Err(RenderFault::failed("sparkline series is empty"));
    }
    if let Some(index) = series.iter().position(|value| !value.is_finite()) {
        return Err(RenderFault::failed(format!(
            "sparkline value at index {index} is not finite"
        )));
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let y_of = |value: f64| {
        if span == 0.0 {
            height / 2.0
        } else {
            height - (value - min) / span * height
        }
    };

    if let [only] = series {
        let y = y_of(*only);
        return Ok(format!("0,{y:.1} {width:.1},{y:.1}"));
    }

    let step = width / (series.len() - 1) as f64;
    Ok(series
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{:.1},{:.1}", index as f64 * step, y_of(*value)))
        .collect::<Vec<_>>()
        .join(" "))
}

fn sparkline_view(series: &[f64]) -> Result<View, RenderFault> {
    let points = sparkline_points(series, SPARKLINE_WIDTH, SPARKLINE_HEIGHT)?;
    let latest = series.last().copied().unwrap_or_default();

    Ok(view! {
        <Stack gap=LayoutGap::Sm>
            <svg
                class="kit-sparkline"
                viewBox=format!("0 0 {SPARKLINE_WIDTH} {SPARKLINE_HEIGHT}")
                role="img"
                aria-label="Weekly usage trend"
            >
                <polyline points=points fill="none" stroke="currentColor" stroke-width="2"/>
            </svg>
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {format!("Latest: {latest:.0} builds")}
            </Text>
        </Stack>
    }
    .into_view())
}

const MAX_TILT_DEG: f64 = 12.0;
const TILT_CARD_WIDTH: i32 = 240;
const TILT_CARD_HEIGHT: i32 = 160;

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` inside a `width` x `height`
/// card. The card tilts toward the pointer, up to a fixed maximum.
pub fn tilt_angles(x: i32, y: i32, width: i32, height: i32) -> (f64, f64) {
    if width <= 0 || height <= 0 {
        return (0.0, 0.0);
    }
    let normalize = |offset: i32, extent: i32| {
        let half = f64::from(extent) / 2.0;
        ((f64::from(offset) - half) / half).clamp(-1.0, 1.0)
    };
    let nx = normalize(x, width);
    let ny = normalize(y, height);
    (-ny * MAX_TILT_DEG, nx * MAX_TILT_DEG)
}

#[component]
fn TiltCardDemo() -> impl IntoView {
    let tilt = create_rw_signal((0.0_f64, 0.0_f64));
    let transform = move || {
        let (rotate_x, rotate_y) = tilt.get();
        format!("perspective(600px) rotateX({rotate_x:.1}deg) rotateY({rotate_y:.1}deg)")
    };

    view! {
        <div
            class="kit-tilt-card"
            data-kit-kind="tilt-card"
            style:width=format!("{TILT_CARD_WIDTH}px")
            style:height=format!("{TILT_CARD_HEIGHT}px")
            style:transform=transform
            on:mousemove=move |ev| {
                let angles =
                    tilt_angles(ev.offset_x(), ev.offset_y(), TILT_CARD_WIDTH, TILT_CARD_HEIGHT);
                tilt.set(angles);
            }
            on:mouseleave=move |_| tilt.set((0.0, 0.0))
        >
            <Text role=TextRole::Title>"Hover me"</Text>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_registered_key_resolves() {
        for key in DEMO_KEYS {
            assert!(live_demo(key).is_some(), "missing factory for {key}");
        }
        assert!(live_demo("not-a-demo").is_none());
    }

    #[test]
    fn checkout_steps_clamp_at_both_ends() {
        assert_eq!(CheckoutStep::Cart.previous(), CheckoutStep::Cart);
        assert_eq!(CheckoutStep::Cart.next(), CheckoutStep::Shipping);
        assert_eq!(CheckoutStep::Payment.previous(), CheckoutStep::Shipping);
        assert_eq!(CheckoutStep::Review.next(), CheckoutStep::Review);
        assert_eq!(CheckoutStep::total(), 4);
    }

    #[test]
    fn sparkline_scales_series_into_box() {
        let points = sparkline_points(&[0.0, 5.0, 10.0], 100.0, 20.0).expect("valid series");

        assert_eq!(points, "0.0,20.0 50.0,10.0 100.0,0.0");
    }

    #[test]
    fn flat_and_single_point_series_draw_midline() {
        assert_eq!(
            sparkline_points(&[4.0, 4.0], 10.0, 8.0).expect("flat series"),
            "0.0,4.0 10.0,4.0"
        );
        assert_eq!(
            sparkline_points(&[7.0], 10.0, 8.0).expect("single point"),
            "0,4.0 10.0,4.0"
        );
    }

    #[test]
    fn sparkline_rejects_unusable_series() {
        assert_eq!(
            sparkline_points(&[], 10.0, 10.0),
            Err(RenderFault::Failed("sparkline series is empty".to_string()))
        );
        assert_eq!(
            sparkline_points(&[1.0, f64::NAN], 10.0, 10.0),
            Err(RenderFault::Failed(
                "sparkline value at index 1 is not finite".to_string()
            ))
        );
    }

    #[test]
    fn tilt_follows_pointer_and_stays_bounded() {
        assert_eq!(tilt_angles(120, 80, 240, 160), (0.0, 0.0));
        assert_eq!(tilt_angles(240, 0, 240, 160), (MAX_TILT_DEG, MAX_TILT_DEG));
        assert_eq!(tilt_angles(-50, 500, 240, 160), (-MAX_TILT_DEG, -MAX_TILT_DEG));
        assert_eq!(tilt_angles(10, 10, 0, 160), (0.0, 0.0));
    }
}
