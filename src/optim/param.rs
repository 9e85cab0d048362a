//! Parameters and parameter groups
//!
//! [`Parameter`] is a 1-D f32 tensor with an optional accumulated
//! gradient. Storage sits behind `Rc<RefCell<…>>`, so cloning a parameter
//! aliases the same data: a model and an optimizer can hold the same
//! parameter and both observe updates. This also makes `Parameter`
//! `!Send`; drive a given optimizer instance from one thread.

use ndarray::Array1;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A trainable parameter vector with an optional accumulated gradient.
#[derive(Clone, Debug)]
pub struct Parameter {
    data: Rc<RefCell<Array1<f32>>>,
    grad: Rc<RefCell<Option<Array1<f32>>>>,
}

impl Parameter {
    pub fn new(data: Array1<f32>) -> Self {
        Self {
            data: Rc::new(RefCell::new(data)),
            grad: Rc::new(RefCell::new(None)),
        }
    }

    pub fn from_vec(values: Vec<f32>) -> Self {
        Self::new(Array1::from(values))
    }

    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the parameter values.
    pub fn data(&self) -> Ref<'_, Array1<f32>> {
        self.data.borrow()
    }

    /// Mutably borrow the parameter values.
    pub fn data_mut(&self) -> RefMut<'_, Array1<f32>> {
        self.data.borrow_mut()
    }

    /// Current accumulated gradient, if any.
    pub fn grad(&self) -> Option<Array1<f32>> {
        self.grad.borrow().clone()
    }

    /// Replace the accumulated gradient.
    pub fn set_grad(&self, grad: Array1<f32>) {
        *self.grad.borrow_mut() = Some(grad);
    }

    /// Add into the accumulated gradient, initializing it if absent.
    pub fn accumulate_grad(&self, grad: &Array1<f32>) {
        let mut slot = self.grad.borrow_mut();
        match slot.as_mut() {
            Some(existing) => *existing += grad,
            None => *slot = Some(grad.clone()),
        }
    }

    /// Clear the accumulated gradient.
    pub fn zero_grad(&self) {
        *self.grad.borrow_mut() = None;
    }
}

/// A named subset of parameters sharing one learning rate.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    pub name: String,
    pub params: Vec<Parameter>,
    pub lr: f32,
}

impl ParamGroup {
    pub fn new(name: impl Into<String>, params: Vec<Parameter>, lr: f32) -> Self {
        Self { name: name.into(), params, lr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let param = Parameter::from_vec(vec![1.0, 2.0]);
        let alias = param.clone();
        alias.data_mut()[0] = 5.0;
        assert_eq!(param.data()[0], 5.0);
    }

    #[test]
    fn test_accumulate_grad() {
        let param = Parameter::from_vec(vec![0.0, 0.0]);
        assert!(param.grad().is_none());

        param.accumulate_grad(&Array1::from(vec![1.0, 2.0]));
        param.accumulate_grad(&Array1::from(vec![1.0, 2.0]));
        let grad = param.grad().unwrap();
        assert_eq!(grad.to_vec(), vec![2.0, 4.0]);

        param.zero_grad();
        assert!(param.grad().is_none());
    }

    #[test]
    fn test_group_holds_one_rate() {
        let group = ParamGroup::new("decoder", vec![Parameter::from_vec(vec![0.0])], 1e-3);
        assert_eq!(group.name, "decoder");
        assert!((group.lr - 1e-3).abs() < 1e-12);
    }
}
