//! Phonebook entry point
//!
//! Handles platform-specific initialization and wires the UI to the store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement};

    use phonebook::form::parse_submission;
    use phonebook::platform::LocalStorage;
    use phonebook::view::{ListView, duplicate_warning};
    use phonebook::{ContactId, ContactStore, StoreError};

    type Store = ContactStore<LocalStorage>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Phonebook starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let storage = match LocalStorage::open() {
            Ok(storage) => storage,
            Err(e) => {
                log::error!("Cannot start phonebook: {}", e);
                return;
            }
        };
        let store = Rc::new(RefCell::new(ContactStore::load(storage)));

        setup_contact_form(&document, store.clone());
        setup_filter(&document, store.clone());
        setup_contact_list(&document, store.clone());

        render(&document, &store.borrow());

        log::info!("Phonebook running!");
    }

    /// Redraw the contact list (or the empty message) from store state
    fn render(document: &Document, store: &Store) {
        let Some(list) = document.get_element_by_id("contact-list") else {
            log::warn!("Missing #contact-list element");
            return;
        };
        let message = document.get_element_by_id("empty-message");

        list.set_inner_html("");
        match ListView::from_store(store) {
            ListView::Empty(text) => {
                let _ = list.set_attribute("class", "hidden");
                if let Some(el) = message {
                    el.set_text_content(Some(text));
                    let _ = el.set_attribute("class", "");
                }
            }
            ListView::Rows(rows) => {
                let _ = list.set_attribute("class", "");
                if let Some(el) = message {
                    let _ = el.set_attribute("class", "hidden");
                }
                for row in rows {
                    if let Err(e) = append_row(document, &list, row.id.as_str(), &row.label) {
                        log::warn!("Failed to render contact {}: {:?}", row.id, e);
                    }
                }
            }
        }
    }

    fn append_row(document: &Document, list: &Element, id: &str, label: &str) -> Result<(), JsValue> {
        let item = document.create_element("li")?;
        item.set_attribute("class", "contact-item")?;

        let text = document.create_element("span")?;
        text.set_text_content(Some(label));
        item.append_child(&text)?;

        let button = document.create_element("button")?;
        button.set_attribute("type", "button")?;
        button.set_attribute("data-id", id)?;
        button.set_text_content(Some("Delete"));
        item.append_child(&button)?;

        list.append_child(&item)?;
        Ok(())
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn input_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn setup_contact_form(document: &Document, store: Rc<RefCell<Store>>) {
        let Some(form) = document.get_element_by_id("contact-form") else {
            log::warn!("Missing #contact-form element");
            return;
        };

        let document_clone = document.clone();
        let form_clone = form.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();

            let name = input_value(&document_clone, "contact-name");
            let number = input_value(&document_clone, "contact-number");
            let input = match parse_submission(&name, &number) {
                Ok(input) => input,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };

            let mut s = store.borrow_mut();
            match s.add_contact(input) {
                Ok(_) => {
                    if let Some(form) = form_clone.dyn_ref::<HtmlFormElement>() {
                        form.reset();
                    }
                    render(&document_clone, &s);
                }
                Err(StoreError::DuplicateName { name }) => alert(&duplicate_warning(&name)),
                Err(e) => log::error!("Failed to add contact: {}", e),
            }
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_filter(document: &Document, store: Rc<RefCell<Store>>) {
        let Some(filter) = document.get_element_by_id("filter") else {
            log::warn!("Missing #filter element");
            return;
        };

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let mut s = store.borrow_mut();
            s.change_filter(input.value());
            render(&document_clone, &s);
        });
        let _ = filter.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Delete buttons are handled by one delegated listener on the list
    fn setup_contact_list(document: &Document, store: Rc<RefCell<Store>>) {
        let Some(list) = document.get_element_by_id("contact-list") else {
            return;
        };

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            let id = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("button[data-id]").ok().flatten())
                .and_then(|button| button.get_attribute("data-id"));
            let Some(id) = id else {
                return;
            };

            let mut s = store.borrow_mut();
            if let Err(e) = s.delete_contact(&ContactId::new(id)) {
                log::error!("Failed to delete contact: {}", e);
                return;
            }
            render(&document_clone, &s);
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Phonebook (native) starting...");
    log::info!("The browser UI requires a wasm build - run with `trunk serve` for the web version");

    if let Err(e) = demo_session() {
        log::error!("Demo session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Exercise the store against in-memory storage, including a reload
#[cfg(not(target_arch = "wasm32"))]
fn demo_session() -> Result<(), phonebook::StoreError> {
    use phonebook::view::{ListView, duplicate_warning};
    use phonebook::{ContactStore, MemoryStorage, NewContact, StoreError};

    let mut store = ContactStore::load(MemoryStorage::new());
    for (name, number) in [("Rosie Simpson", "459-12-56"), ("Hermione Kline", "443-89-12")] {
        store.add_contact(NewContact::new(name, number))?;
    }
    let eden = store.add_contact(NewContact::new("Eden Clements", "645-17-79"))?;

    match store.add_contact(NewContact::new("rosie simpson", "000-00-00")) {
        Err(StoreError::DuplicateName { name }) => println!("{}", duplicate_warning(&name)),
        Err(e) => return Err(e),
        Ok(contact) => log::warn!("Duplicate {} was accepted", contact.name),
    }

    store.change_filter("ro");
    print_list(&ListView::from_store(&store));

    store.delete_contact(&eden.id)?;

    let reloaded = ContactStore::load(store.into_storage());
    print_list(&ListView::from_store(&reloaded));
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn print_list(view: &phonebook::view::ListView) {
    use phonebook::view::ListView;

    match view {
        ListView::Empty(text) => println!("{}", text),
        ListView::Rows(rows) => {
            for row in rows {
                println!("  {}", row.label);
            }
        }
    }
    println!();
}
