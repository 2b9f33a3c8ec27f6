//! Pages for the Animal entity.

use wildpreserve_core::forms::{escape_html as esc, FieldError};
use wildpreserve_db::models::{Animal, AnimalDetail, AnimalListRow, Class, Order, PreserveStatus};

use super::{error_list, layout};
use crate::forms::AnimalForm;

pub fn list_page(animals: &[AnimalListRow]) -> String {
    let mut body = String::from("<h1>Animal List</h1>\n<ul>\n");
    for animal in animals {
        body.push_str(&format!(
            "<li><a href=\"{url}\">{name}</a> ({binomial}) &mdash; {class}</li>\n",
            url = animal.url(),
            name = esc(&animal.name),
            binomial = esc(&animal.binomial),
            class = esc(&animal.class_name),
        ));
    }
    if animals.is_empty() {
        body.push_str("<li>There are no animals.</li>\n");
    }
    body.push_str("</ul>\n");
    layout("Animal List", &body)
}

pub fn detail_page(detail: &AnimalDetail, statuses: &[PreserveStatus]) -> String {
    let animal = &detail.animal;
    let mut body = format!(
        "<h1>{name} ({binomial})</h1>\n\
         <p><strong>Class:</strong> <a href=\"{class_url}\">{class}</a></p>\n",
        name = esc(&animal.name),
        binomial = esc(&animal.binomial),
        class_url = detail.class.url(),
        class = esc(&detail.class.name),
    );

    body.push_str("<p><strong>Orders:</strong> ");
    let orders: Vec<String> = detail
        .orders
        .iter()
        .map(|o| format!("<a href=\"{}\">{}</a>", o.url(), esc(&o.name)))
        .collect();
    body.push_str(&orders.join(", "));
    body.push_str("</p>\n");

    body.push_str(&format!(
        "<p>{description}</p>\n<img src=\"{img}\" alt=\"{name}\">\n",
        description = esc(&animal.description),
        img = esc(&animal.img),
        name = esc(&animal.name),
    ));

    body.push_str("<h2>Preserve Statuses</h2>\n");
    if statuses.is_empty() {
        body.push_str("<p>There are no preserve status records for this animal.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for status in statuses {
            body.push_str(&format!(
                "<li><a href=\"{url}\">{name}</a> &mdash; {status} (expected back {date})</li>\n",
                url = status.url(),
                name = esc(&status.name),
                status = status.status,
                date = status.expected_back_formatted(),
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&format!(
        "<p><a href=\"{url}/update\">Update</a> | <a href=\"{url}/delete\">Delete</a></p>\n",
        url = animal.url(),
    ));
    layout(&animal.name, &body)
}

pub fn form_page(
    title: &str,
    classes: &[Class],
    orders: &[Order],
    form: &AnimalForm,
    errors: &[FieldError],
) -> String {
    let mut class_options = String::new();
    for class in classes {
        class_options.push_str(&format!(
            "<option value=\"{id}\"{selected}>{name}</option>\n",
            id = class.id,
            selected = if form.has_class(class.id) {
                " selected"
            } else {
                ""
            },
            name = esc(&class.name),
        ));
    }

    let mut order_boxes = String::new();
    for order in orders {
        order_boxes.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"order\" value=\"{id}\"{checked}> {name}</label>\n",
            id = order.id,
            checked = if form.has_order(order.id) {
                " checked"
            } else {
                ""
            },
            name = esc(&order.name),
        ));
    }

    let body = format!(
        "<h1>{title}</h1>\n\
         <form method=\"POST\">\n\
         <label for=\"name\">Name:</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\">\n\
         <label for=\"binomial\">Binomial:</label>\n\
         <input id=\"binomial\" name=\"binomial\" type=\"text\" value=\"{binomial}\">\n\
         <label for=\"description\">Description:</label>\n\
         <textarea id=\"description\" name=\"description\">{description}</textarea>\n\
         <label for=\"animalclass\">Class:</label>\n\
         <select id=\"animalclass\" name=\"animalclass\">\n\
         <option value=\"\">--Please select a class--</option>\n\
         {class_options}\
         </select>\n\
         <fieldset><legend>Orders:</legend>\n{order_boxes}</fieldset>\n\
         <label for=\"img\">Image:</label>\n\
         <input id=\"img\" name=\"img\" type=\"text\" value=\"{img}\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n\
         {errors}",
        title = esc(title),
        name = esc(&form.name),
        binomial = esc(&form.binomial),
        description = esc(&form.description),
        img = esc(&form.img),
        errors = error_list(errors),
    );
    layout(title, &body)
}

/// Delete confirmation. Lists dependent preserve statuses when the delete
/// is blocked.
pub fn delete_page(animal: &Animal, statuses: &[PreserveStatus]) -> String {
    let mut body = format!("<h1>Delete Animal: {}</h1>\n", esc(&animal.name));
    if statuses.is_empty() {
        body.push_str(
            "<p>Do you really want to delete this animal?</p>\n\
             <form method=\"POST\">\n<button type=\"submit\">Delete</button>\n</form>\n",
        );
    } else {
        body.push_str(
            "<p>Delete the following preserve statuses before attempting to delete this animal.</p>\n\
             <h2>Preserve Statuses</h2>\n<ul>\n",
        );
        for status in statuses {
            body.push_str(&format!(
                "<li><a href=\"{url}\">{name}</a> &mdash; {status}</li>\n",
                url = status.url(),
                name = esc(&status.name),
                status = status.status,
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Delete Animal", &body)
}
