//! New-product payload validated at construction

use super::validation::ValidationError;

/// A product row ready for insertion.
///
/// The four required fields must be present; description and supplier are
/// optional. No range or type validation beyond presence — numeric
/// constraints belong to the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub quantity_in_stock: i64,
    pub sale_price: f64,
    pub purchase_price: f64,
    pub supplier_id: Option<i64>,
}

impl NewProduct {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        quantity_in_stock: Option<i64>,
        sale_price: Option<f64>,
        purchase_price: Option<f64>,
        supplier_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let name = name.ok_or(ValidationError::Missing {
            field: "productName",
        })?;
        let quantity_in_stock = quantity_in_stock.ok_or(ValidationError::Missing {
            field: "initialQuantity",
        })?;
        let sale_price = sale_price.ok_or(ValidationError::Missing { field: "salePrice" })?;
        let purchase_price = purchase_price.ok_or(ValidationError::Missing {
            field: "purchasePrice",
        })?;

        Ok(Self {
            name,
            description,
            quantity_in_stock,
            sale_price,
            purchase_price,
            supplier_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_optional_fields_absent() {
        let product =
            NewProduct::new(Some("Widget".into()), None, Some(5), Some(9.99), Some(4.5), None)
                .unwrap();
        assert_eq!(product.name, "Widget");
        assert!(product.description.is_none());
        assert!(product.supplier_id.is_none());
    }

    #[test]
    fn rejects_missing_required_field() {
        let err = NewProduct::new(Some("Widget".into()), None, None, Some(9.99), Some(4.5), None)
            .unwrap_err();
        assert_eq!(err.to_string(), "missing required field: initialQuantity");
    }
}
