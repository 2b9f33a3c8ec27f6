//! Pages for the Order entity.

use wildpreserve_core::forms::{escape_html as esc, FieldError};
use wildpreserve_db::models::{Animal, Order};

use super::{error_list, layout};
use crate::forms::OrderForm;

pub fn list_page(orders: &[Order]) -> String {
    let mut body = String::from("<h1>Order List</h1>\n<ul>\n");
    for order in orders {
        body.push_str(&format!(
            "<li><a href=\"{url}\">{name}</a></li>\n",
            url = order.url(),
            name = esc(&order.name),
        ));
    }
    if orders.is_empty() {
        body.push_str("<li>There are no orders.</li>\n");
    }
    body.push_str("</ul>\n");
    layout("Order List", &body)
}

pub fn detail_page(order: &Order, animals: &[Animal]) -> String {
    let mut body = format!("<h1>Order: {}</h1>\n", esc(&order.name));
    body.push_str("<h2>Animals</h2>\n");
    if animals.is_empty() {
        body.push_str("<p>This order has no animals.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for animal in animals {
            body.push_str(&format!(
                "<li><a href=\"{url}\">{name}</a> ({binomial})</li>\n",
                url = animal.url(),
                name = esc(&animal.name),
                binomial = esc(&animal.binomial),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"{url}/update\">Update</a> | <a href=\"{url}/delete\">Delete</a></p>\n",
        url = order.url(),
    ));
    layout("Order Detail", &body)
}

pub fn form_page(title: &str, form: &OrderForm, errors: &[FieldError]) -> String {
    let body = format!(
        "<h1>{title}</h1>\n\
         <form method=\"POST\">\n\
         <label for=\"name\">Name:</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\" placeholder=\"e.g. Carnivora\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n\
         {errors}",
        title = esc(title),
        name = esc(&form.name),
        errors = error_list(errors),
    );
    layout(title, &body)
}

/// Delete confirmation. Lists dependent animals when the delete is blocked.
pub fn delete_page(order: &Order, animals: &[Animal]) -> String {
    let mut body = format!("<h1>Delete Order: {}</h1>\n", esc(&order.name));
    if animals.is_empty() {
        body.push_str(
            "<p>Do you really want to delete this order?</p>\n\
             <form method=\"POST\">\n<button type=\"submit\">Delete</button>\n</form>\n",
        );
    } else {
        body.push_str(
            "<p>Delete the following animals before attempting to delete this order.</p>\n\
             <h2>Animals</h2>\n<ul>\n",
        );
        for animal in animals {
            body.push_str(&format!(
                "<li><a href=\"{url}\">{name}</a></li>\n",
                url = animal.url(),
                name = esc(&animal.name),
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Delete Order", &body)
}
