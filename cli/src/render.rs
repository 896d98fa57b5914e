//! Short text renderings of API payloads for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use storefront::net::types::{
    Ack, Cart, CartUpdate, Category, CategoryList, ContactReceipt, FaqList, Order, OrderList, OrderTracking,
    OrderUpdate, Product, ProductList, TestimonialList, User,
};
use storefront::pages::orders::StatusTone;

pub fn user(user: &User) -> String {
    match &user.email {
        Some(email) => format!("{} <{email}>", user.display_name()),
        None => user.display_name(),
    }
}

fn product_line(product: &Product) -> String {
    let mut line = format!("{:<12} {:<32} {:>12}", product.id, product.name, product.price.to_string());
    if let Some(original) = product.original_price.filter(|_| product.on_sale()) {
        let _ = write!(line, "  (was {original})");
    }
    if !product.in_stock {
        line.push_str("  [out of stock]");
    }
    line
}

pub fn product_list(list: &ProductList) -> String {
    if list.products.is_empty() {
        return "no products".to_owned();
    }
    let mut out: Vec<String> = list.products.iter().map(product_line).collect();
    if let (Some(page), Some(total_pages)) = (list.page, list.total_pages) {
        out.push(format!("page {page} of {total_pages}"));
    }
    out.join("\n")
}

pub fn product(product: &Product) -> String {
    let mut out = product_line(product);
    if let Some(description) = &product.description {
        let _ = write!(out, "\n{description}");
    }
    if let (Some(rating), Some(reviews)) = (product.rating, product.review_count) {
        let _ = write!(out, "\nrated {rating:.1} from {reviews} reviews");
    }
    for variant in &product.variants {
        let _ = write!(out, "\n  {:<10} {}", variant.size, variant.price);
    }
    out
}

pub fn category(category: &Category) -> String {
    match category.product_count {
        Some(count) => format!("{:<20} {} ({count} products)", category.slug, category.name),
        None => format!("{:<20} {}", category.slug, category.name),
    }
}

pub fn category_list(list: &CategoryList) -> String {
    if list.categories.is_empty() {
        return "no categories".to_owned();
    }
    list.categories.iter().map(category).collect::<Vec<_>>().join("\n")
}

pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "your cart is empty".to_owned();
    }
    let mut out = String::new();
    for item in &cart.items {
        let variant = item.variant.as_deref().map(|v| format!(" ({v})")).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<10} {}{variant} x{}  {}",
            item.id,
            item.display_name(),
            item.quantity,
            item.line_total()
        );
    }
    let _ = writeln!(out, "subtotal  {}", cart.subtotal);
    let _ = writeln!(out, "shipping  {}", cart.shipping_label());
    let _ = writeln!(out, "tax       {}", cart.tax);
    if let Some(discount) = cart.discount.filter(|d| !d.is_zero()) {
        let _ = writeln!(out, "discount  -{discount}");
    }
    let _ = write!(out, "total     {}", cart.total);
    out
}

pub fn cart_update(update: &CartUpdate) -> String {
    match &update.cart {
        Some(contents) => cart(contents),
        None => ack_text(update.success, update.message.as_deref(), "cart updated"),
    }
}

fn tone_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Pending => "pending",
        StatusTone::Processing => "processing",
        StatusTone::Shipped => "shipped",
        StatusTone::Delivered => "delivered",
        StatusTone::Cancelled => "cancelled",
        StatusTone::Other => "other",
    }
}

fn order_line(order: &Order) -> String {
    let placed = order.created_at.as_deref().unwrap_or("-");
    format!(
        "{:<14} {:<11} {:>12}  {placed}",
        order.reference(),
        tone_label(order.status_tone()),
        order.total.to_string()
    )
}

pub fn order_list(list: &OrderList) -> String {
    if list.orders.is_empty() {
        return "you haven't placed any orders yet".to_owned();
    }
    list.orders.iter().map(order_line).collect::<Vec<_>>().join("\n")
}

pub fn order(order: &Order) -> String {
    let mut out = order_line(order);
    for item in &order.items {
        let name = item
            .name
            .as_deref()
            .or_else(|| item.product.as_ref().and_then(|p| p.name.as_deref()))
            .unwrap_or("Item");
        let _ = write!(out, "\n  {name} x{}", item.quantity);
    }
    if let Some(tracking) = &order.tracking_number {
        let _ = write!(out, "\ntracking {tracking}");
    }
    out
}

pub fn order_update(update: &OrderUpdate, default: &str) -> String {
    match &update.order {
        Some(placed) => order(placed),
        None => ack_text(update.success, update.message.as_deref(), default),
    }
}

pub fn tracking(tracking: &OrderTracking) -> String {
    let mut out = format!("status {}", tracking.status);
    if let Some(carrier) = &tracking.carrier {
        let _ = write!(out, " via {carrier}");
    }
    if let Some(number) = &tracking.tracking_number {
        let _ = write!(out, " ({number})");
    }
    for event in &tracking.timeline {
        let location = event.location.as_deref().map(|l| format!(" @ {l}")).unwrap_or_default();
        let _ = write!(out, "\n  {}  {:<10} {}{location}", event.timestamp, event.status, event.description);
    }
    out
}

pub fn testimonial_list(list: &TestimonialList) -> String {
    if list.testimonials.is_empty() {
        return "no testimonials".to_owned();
    }
    list.testimonials
        .iter()
        .map(|t| {
            let stars = "*".repeat(usize::from(t.rating.min(5)));
            let who = t.name.as_deref().unwrap_or("Anonymous");
            format!("{stars:<5} {who}: {}", t.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn faq_list(list: &FaqList) -> String {
    if list.faqs.is_empty() {
        return "no FAQs".to_owned();
    }
    list.faqs
        .iter()
        .map(|faq| format!("Q: {}\nA: {}", faq.question, faq.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn contact_receipt(receipt: &ContactReceipt) -> String {
    let base = ack_text(receipt.success, receipt.message.as_deref(), "message sent");
    match &receipt.ticket_id {
        Some(ticket) => format!("{base} (ticket {ticket})"),
        None => base,
    }
}

pub fn ack(ack: &Ack, default: &str) -> String {
    ack_text(ack.success, ack.message.as_deref(), default)
}

/// Server message when present, else `default`; flags an explicit failure.
pub fn ack_text(success: Option<bool>, message: Option<&str>, default: &str) -> String {
    let text = message.filter(|m| !m.trim().is_empty()).unwrap_or(default);
    if success == Some(false) { format!("failed: {text}") } else { text.to_owned() }
}
