//! Pages for the PreserveStatus entity.

use wildpreserve_core::forms::{escape_html as esc, FieldError};
use wildpreserve_db::models::{
    AnimalName, PreserveState, PreserveStatus, PreserveStatusWithAnimal,
};

use super::{error_list, layout};
use crate::forms::PreserveStatusForm;

pub fn list_page(statuses: &[PreserveStatusWithAnimal]) -> String {
    let mut body = String::from("<h1>Preserve Status List</h1>\n<ul>\n");
    for status in statuses {
        body.push_str(&format!(
            "<li><a href=\"{url}\">{name}</a> ({animal}) &mdash; {status}</li>\n",
            url = status.url(),
            name = esc(&status.name),
            animal = esc(&status.animal_name),
            status = status.status,
        ));
    }
    if statuses.is_empty() {
        body.push_str("<li>There are no preserve status records.</li>\n");
    }
    body.push_str("</ul>\n");
    layout("Preserve Status List", &body)
}

pub fn detail_page(status: &PreserveStatusWithAnimal) -> String {
    let title = format!("Individual: {}", status.animal_name);
    let body = format!(
        "<h1>{name}</h1>\n\
         <p><strong>Animal:</strong> <a href=\"/wildlife/animal/{animal_id}\">{animal}</a></p>\n\
         <p><strong>Status:</strong> {status}</p>\n\
         <p><strong>Expected back:</strong> {date}</p>\n\
         <p><a href=\"{url}/update\">Update</a> | <a href=\"{url}/delete\">Delete</a></p>\n",
        name = esc(&status.name),
        animal_id = status.animal_id,
        animal = esc(&status.animal_name),
        status = status.status,
        date = status.expected_back_formatted(),
        url = status.url(),
    );
    layout(&title, &body)
}

pub fn form_page(
    title: &str,
    animals: &[AnimalName],
    form: &PreserveStatusForm,
    errors: &[FieldError],
) -> String {
    let mut animal_options = String::new();
    for animal in animals {
        animal_options.push_str(&format!(
            "<option value=\"{id}\"{selected}>{name}</option>\n",
            id = animal.id,
            selected = if form.has_animal(animal.id) {
                " selected"
            } else {
                ""
            },
            name = esc(&animal.name),
        ));
    }

    let mut status_options = String::new();
    for state in PreserveState::ALL {
        status_options.push_str(&format!(
            "<option value=\"{value}\"{selected}>{value}</option>\n",
            value = state,
            selected = if form.has_status(state) {
                " selected"
            } else {
                ""
            },
        ));
    }

    let body = format!(
        "<h1>{title}</h1>\n\
         <form method=\"POST\">\n\
         <label for=\"animal\">Animal:</label>\n\
         <select id=\"animal\" name=\"animal\">\n\
         <option value=\"\">--Please select an animal--</option>\n\
         {animal_options}\
         </select>\n\
         <label for=\"name\">Name:</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\">\n\
         <label for=\"status\">Status:</label>\n\
         <select id=\"status\" name=\"status\">\n{status_options}</select>\n\
         <label for=\"expected_back\">Expected back:</label>\n\
         <input id=\"expected_back\" name=\"expected_back\" type=\"date\" value=\"{expected_back}\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n\
         {errors}",
        title = esc(title),
        name = esc(&form.name),
        expected_back = esc(&form.expected_back),
        errors = error_list(errors),
    );
    layout(title, &body)
}

/// Delete confirmation. Preserve statuses have no dependents, so the
/// confirmation is always offered.
pub fn delete_page(status: &PreserveStatus) -> String {
    let body = format!(
        "<h1>Delete Preserve Status: {name}</h1>\n\
         <p>Do you really want to delete this record?</p>\n\
         <form method=\"POST\">\n<button type=\"submit\">Delete</button>\n</form>\n",
        name = esc(&status.name),
    );
    layout("Delete Preserve Status", &body)
}
