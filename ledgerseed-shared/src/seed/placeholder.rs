/// Fixed sample datasets
///
/// One login user, six customers, thirteen invoices spread across them and a
/// year of monthly revenue. Ids are fixed so repeated runs hit the same keys.

use super::SeedData;
use crate::models::{
    customer::CreateCustomer, invoice::CreateInvoice, revenue::CreateRevenue, user::CreateUser,
};
use chrono::NaiveDate;
use uuid::{uuid, Uuid};

const EVIL_RABBIT: Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA_DE_OLIVEIRA: Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE_ROBINSON: Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL_NOVOTNY: Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY_BURNS: Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS_ORBAN: Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");

const USERS: [(Uuid, &str, &str, &str); 1] = [(
    uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    "User",
    "user@nextmail.com",
    "123456",
)];

const CUSTOMERS: [(Uuid, &str, &str, &str); 6] = [
    (EVIL_RABBIT, "Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    (DELBA_DE_OLIVEIRA, "Delba de Oliveira", "delba@oliveira.com", "/customers/delba-de-oliveira.png"),
    (LEE_ROBINSON, "Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    (MICHAEL_NOVOTNY, "Michael Novotny", "michael@novotny.com", "/customers/michael-novotny.png"),
    (AMY_BURNS, "Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    (BALAZS_ORBAN, "Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

// (customer, amount in cents, status, (year, month, day))
const INVOICES: [(Uuid, i32, &str, (i32, u32, u32)); 13] = [
    (EVIL_RABBIT, 15795, "pending", (2022, 12, 6)),
    (DELBA_DE_OLIVEIRA, 20348, "pending", (2022, 11, 14)),
    (AMY_BURNS, 3040, "paid", (2022, 10, 29)),
    (MICHAEL_NOVOTNY, 44800, "paid", (2023, 9, 10)),
    (BALAZS_ORBAN, 34577, "pending", (2023, 8, 5)),
    (LEE_ROBINSON, 54246, "pending", (2023, 7, 16)),
    (EVIL_RABBIT, 666, "pending", (2023, 6, 27)),
    (MICHAEL_NOVOTNY, 32545, "paid", (2023, 6, 9)),
    (AMY_BURNS, 1250, "paid", (2023, 6, 17)),
    (BALAZS_ORBAN, 8546, "paid", (2023, 6, 7)),
    (DELBA_DE_OLIVEIRA, 500, "paid", (2023, 8, 19)),
    (BALAZS_ORBAN, 8945, "paid", (2023, 6, 3)),
    (LEE_ROBINSON, 1000, "paid", (2022, 6, 5)),
];

const REVENUE: [(&str, i32); 12] = [
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("placeholder invoice dates are valid")
}

impl SeedData {
    /// The built-in sample datasets
    pub fn placeholder() -> Self {
        Self {
            users: USERS
                .iter()
                .map(|&(id, name, email, password)| CreateUser {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .collect(),
            customers: CUSTOMERS
                .iter()
                .map(|&(id, name, email, image_url)| CreateCustomer {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    image_url: image_url.to_string(),
                })
                .collect(),
            invoices: INVOICES
                .iter()
                .map(|&(customer_id, amount, status, ymd)| CreateInvoice {
                    customer_id,
                    amount,
                    status: status.to_string(),
                    date: date(ymd),
                })
                .collect(),
            revenue: REVENUE
                .iter()
                .map(|&(month, revenue)| CreateRevenue {
                    month: month.to_string(),
                    revenue,
                })
                .collect(),
        }
    }
}
