//! Payment repository.
//!
//! Payments are written together with new memberships and read back as a
//! joined history (member name, plan, amount, date) for report task 10.

use super::db::Db;
use crate::libs::error::Result;
use rusqlite::{params, Connection};
use serde::Serialize;

const INSERT_PAYMENT: &str = "INSERT INTO Payment (memberID, planID, amountPaid, paymentDate) VALUES (?1, ?2, ?3, ?4)";
const SELECT_HISTORY: &str = "SELECT p.paymentID, m.memberID, m.name, mp.planID, p.amountPaid, p.paymentDate
    FROM Payment p
    JOIN Member m ON p.memberID = m.memberID
    JOIN MembershipPlan mp ON p.planID = mp.planID
    ORDER BY p.paymentDate";

/// Field set for recording a payment.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub member_id: i64,
    pub plan_id: i64,
    pub amount: f64,
    pub date: String,
}

/// A payment joined with its member and plan.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecord {
    pub payment_id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub plan_id: i64,
    pub amount: f64,
    pub date: String,
}

pub struct Payments<'a> {
    conn: &'a Connection,
}

impl<'a> Payments<'a> {
    pub fn new(db: &'a Db) -> Self {
        Payments { conn: &db.conn }
    }

    /// Records a payment and returns the assigned surrogate key.
    pub fn create(&self, payment: &NewPayment) -> Result<i64> {
        self.conn.execute(
            INSERT_PAYMENT,
            params![payment.member_id, payment.plan_id, payment.amount, payment.date],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn history(&self) -> Result<Vec<PaymentRecord>> {
        let mut stmt = self.conn.prepare(SELECT_HISTORY)?;
        let rows = stmt.query_map([], |row| {
            Ok(PaymentRecord {
                payment_id: row.get(0)?,
                member_id: row.get(1)?,
                member_name: row.get(2)?,
                plan_id: row.get(3)?,
                amount: row.get(4)?,
                date: row.get(5)?,
            })
        })?;

        let mut payments = Vec::new();
        for payment in rows {
            payments.push(payment?);
        }
        Ok(payments)
    }
}
