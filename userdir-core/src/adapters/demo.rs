//! Demo user source
//!
//! Serves the ten sample records of the public placeholder directory so the
//! viewer can be tried without network access.

use crate::domain::result::Result;
use crate::domain::{Address, Company, User};
use crate::ports::UserSource;

/// Generate demo users
pub fn generate_demo_users() -> Vec<User> {
    let rows: [(&str, &str, &str, (&str, &str, &str, &str), (&str, &str, &str)); 10] = [
        (
            "Leanne Graham",
            "Sincere@april.biz",
            "1-770-736-8031 x56442",
            ("Kulas Light", "Apt. 556", "Gwenborough", "92998-3874"),
            ("Romaguera-Crona", "Multi-layered client-server neural-net", "harness real-time e-markets"),
        ),
        (
            "Ervin Howell",
            "Shanna@melissa.tv",
            "010-692-6593 x09125",
            ("Victor Plains", "Suite 879", "Wisokyburgh", "90566-7771"),
            ("Deckow-Crist", "Proactive didactic contingency", "synergize scalable supply-chains"),
        ),
        (
            "Clementine Bauch",
            "Nathan@yesenia.net",
            "1-463-123-4447",
            ("Douglas Extension", "Suite 847", "McKenziehaven", "59590-4157"),
            ("Romaguera-Jacobson", "Face to face bifurcated interface", "e-enable strategic applications"),
        ),
        (
            "Patricia Lebsack",
            "Julianne.OConner@kory.org",
            "493-170-9623 x156",
            ("Hoeger Mall", "Apt. 692", "South Elvis", "53919-4257"),
            ("Robel-Corkery", "Multi-tiered zero tolerance productivity", "transition cutting-edge web services"),
        ),
        (
            "Chelsey Dietrich",
            "Lucio_Hettinger@annie.ca",
            "(254)954-1289",
            ("Skiles Walks", "Suite 351", "Roscoeview", "33263"),
            ("Keebler LLC", "User-centric fault-tolerant solution", "revolutionize end-to-end systems"),
        ),
        (
            "Mrs. Dennis Schulist",
            "Karley_Dach@jasper.info",
            "1-477-935-8478 x6430",
            ("Norberto Crossing", "Apt. 950", "South Christy", "23505-1337"),
            ("Considine-Lockman", "Synchronised bottom-line interface", "e-enable innovative applications"),
        ),
        (
            "Kurtis Weissnat",
            "Telly.Hoeger@billy.biz",
            "210.067.6132",
            ("Rex Trail", "Suite 280", "Howemouth", "58804-1099"),
            ("Johns Group", "Configurable multimedia task-force", "generate enterprise e-tailers"),
        ),
        (
            "Nicholas Runolfsdottir V",
            "Sherwood@rosamond.me",
            "586.493.6943 x140",
            ("Ellsworth Summit", "Suite 729", "Aliyaview", "45169"),
            ("Abernathy Group", "Implemented secondary concept", "e-enable extensible e-tailers"),
        ),
        (
            "Glenna Reichert",
            "Chaim_McDermott@dana.io",
            "(775)976-6794 x41206",
            ("Dayna Park", "Suite 449", "Bartholomebury", "76495-3109"),
            ("Yost and Sons", "Switchable contextually-based project", "aggregate real-time technologies"),
        ),
        (
            "Clementina DuBuque",
            "Rey.Padberg@karina.biz",
            "024-648-3804",
            ("Kattie Turnpike", "Suite 198", "Lebsackbury", "31428-2261"),
            ("Hoeger LLC", "Centralized empowering task-force", "target end-to-end models"),
        ),
    ];

    rows.iter()
        .zip(1..)
        .map(|(&(name, email, phone, address, company), id)| {
            User::new(id, name, email)
                .with_phone(phone)
                .with_address(Address::new(address.0, address.1, address.2, address.3))
                .with_company(Company::new(company.0, company.1, company.2))
        })
        .collect()
}

/// Demo user source
///
/// Implements UserSource with the canned records above; never fails.
pub struct DemoUserSource;

impl DemoUserSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoUserSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSource for DemoUserSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch_users(&self) -> Result<Vec<User>> {
        Ok(generate_demo_users())
    }
}
