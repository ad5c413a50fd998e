//! Event ticket selection screen

use crate::error::{ValidationError, ValidationResult};
use crate::models::booking::LineItem;
use crate::models::event::{Event, TicketType};
use crate::reservation::draft::BookingDraft;
use crate::reservation::time_slot::TimeSlot;
use crate::types::{BookingType, Money};
use crate::validation::parse_date;

/// Most tickets one booking may hold across all tiers
pub const MAX_TICKETS_PER_BOOKING: u32 = 10;

#[derive(Debug, Clone)]
pub struct EventBookingForm {
    event: Event,
    quantities: Vec<u32>,
}

impl EventBookingForm {
    pub fn new(event: Event) -> Self {
        let quantities = vec![0; event.draft.ticket_types.len()];
        Self { event, quantities }
    }

    pub fn ticket_types(&self) -> &[TicketType] {
        &self.event.draft.ticket_types
    }

    pub fn quantity(&self, index: usize) -> u32 {
        self.quantities.get(index).copied().unwrap_or(0)
    }

    pub fn total_tickets(&self) -> u32 {
        self.quantities.iter().sum()
    }

    /// Set the quantity of one ticket tier
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> ValidationResult {
        let ticket = self
            .event
            .draft
            .ticket_types
            .get(index)
            .ok_or_else(|| ValidationError::invalid("ticket_type", "unknown ticket type"))?;
        if quantity > ticket.available {
            return Err(ValidationError::invalid(
                "quantity",
                format!("only {} {} tickets left", ticket.available, ticket.name),
            ));
        }
        let others = self.total_tickets() - self.quantities[index];
        if others + quantity > MAX_TICKETS_PER_BOOKING {
            return Err(ValidationError::invalid(
                "quantity",
                format!("at most {MAX_TICKETS_PER_BOOKING} tickets per booking"),
            ));
        }
        self.quantities[index] = quantity;
        Ok(())
    }

    pub fn total(&self) -> Money {
        self.ticket_types()
            .iter()
            .zip(&self.quantities)
            .map(|(ticket, &qty)| ticket.price * Money::from(qty))
            .sum()
    }

    pub fn build_checkout(&self) -> ValidationResult<BookingDraft> {
        if self.total_tickets() == 0 {
            return Err(ValidationError::invalid("quantity", "select at least one ticket"));
        }
        let date = parse_date(&self.event.draft.start_date, "date")?;

        let mut draft = BookingDraft::new(
            BookingType::Event,
            &self.event.id,
            &self.event.draft.title,
            date,
        );
        if let Some(start) = TimeSlot::parse(&self.event.draft.start_time) {
            draft = draft.with_time_slot(start);
        }
        for (ticket, &qty) in self.ticket_types().iter().zip(&self.quantities) {
            if qty > 0 {
                draft = draft.with_line_item(LineItem::new(
                    format!("{} ticket", ticket.name),
                    ticket.price,
                    qty,
                ));
            }
        }
        Ok(draft)
    }
}
