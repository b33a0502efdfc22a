// Domain layer: conversion models and the ports the batch converter depends on.

pub mod model;
pub mod ports;
